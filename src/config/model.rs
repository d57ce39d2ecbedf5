// src/config/model.rs

use serde::Deserialize;

use crate::dag::{DEFAULT_MAX_TASKS, ScheduleLimits};
use crate::types::OutputFormat;

/// Tool configuration as read from `Taskwave.toml`.
///
/// ```toml
/// [scheduler]
/// max_tasks = 10000
///
/// [output]
/// format = "text"
/// explain = true
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unchecked form; convert it with `ConfigFile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub scheduler: SchedulerSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Validated configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub scheduler: SchedulerSection,
    pub output: OutputSection,
}

impl ConfigFile {
    /// Only `validate` should call this; everyone else goes through
    /// `TryFrom<RawConfigFile>`.
    pub(crate) fn new_unchecked(scheduler: SchedulerSection, output: OutputSection) -> Self {
        Self { scheduler, output }
    }

    pub fn limits(&self) -> ScheduleLimits {
        ScheduleLimits {
            max_tasks: self.scheduler.max_tasks,
        }
    }
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSection {
    /// Largest request accepted, in tasks. Must be >= 1.
    #[serde(default = "default_max_tasks")]
    pub max_tasks: usize,
}

fn default_max_tasks() -> usize {
    DEFAULT_MAX_TASKS
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            max_tasks: default_max_tasks(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the per-wave breakdown along with the order.
    #[serde(default)]
    pub explain: bool,
}
