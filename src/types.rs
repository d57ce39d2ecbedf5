use clap::ValueEnum;
use serde::Deserialize;

/// How results are written to stdout.
///
/// - `Json`: the `{"recommendedOrder": [...]}` response body (default).
/// - `Text`: one task title per line, for shell pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Json
    }
}

/// Encoding of a request file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestFormat {
    Json,
    /// `[[tasks]]` array-of-tables layout.
    Toml,
}

impl RequestFormat {
    /// Infer the format from a file extension; anything but `.toml` is JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(|e| e.to_ascii_lowercase()) {
            Some(e) if e == "toml" => RequestFormat::Toml,
            _ => RequestFormat::Json,
        }
    }
}
