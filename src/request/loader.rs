// src/request/loader.rs

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::errors::Result;
use crate::request::model::ScheduleRequest;
use crate::types::RequestFormat;

/// Path value meaning "read the request from stdin".
pub const STDIN_PATH: &str = "-";

/// Load a scheduling request from `path`.
///
/// The format is inferred from the extension (`.toml` is TOML, everything
/// else JSON). `-` reads a JSON request from stdin.
///
/// This only deserializes; semantic checks (unknown dependencies, cycles,
/// duplicate titles) belong to the scheduler.
pub fn load_request_from_path(path: impl AsRef<Path>) -> Result<ScheduleRequest> {
    let path = path.as_ref();

    if path.as_os_str() == STDIN_PATH {
        debug!("reading scheduling request from stdin");
        return load_request_from_reader(std::io::stdin().lock(), RequestFormat::Json);
    }

    let format = RequestFormat::from_extension(path.extension().and_then(|e| e.to_str()));
    debug!(path = %path.display(), ?format, "reading scheduling request");

    let contents = fs::read_to_string(path)?;
    parse_request(&contents, format)
}

/// Read a whole request from any reader.
pub fn load_request_from_reader<R: Read>(
    mut reader: R,
    format: RequestFormat,
) -> Result<ScheduleRequest> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_request(&contents, format)
}

/// Deserialize a request from an in-memory string.
///
/// Blank input is an empty request rather than a parse error.
pub fn parse_request(contents: &str, format: RequestFormat) -> Result<ScheduleRequest> {
    if contents.trim().is_empty() {
        return Ok(ScheduleRequest::default());
    }

    let request = match format {
        RequestFormat::Json => serde_json::from_str::<ScheduleRequest>(contents)?,
        RequestFormat::Toml => toml::from_str::<ScheduleRequest>(contents)?,
    };

    Ok(request)
}
