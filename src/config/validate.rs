// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{Result, TaskwaveError};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::TaskwaveError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.scheduler, raw.output))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_scheduler_section(cfg)?;
    Ok(())
}

fn validate_scheduler_section(cfg: &RawConfigFile) -> Result<()> {
    if cfg.scheduler.max_tasks == 0 {
        return Err(TaskwaveError::ConfigError(
            "[scheduler].max_tasks must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
