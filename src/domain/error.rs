use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for manifest-bundle operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// The newline-delimited list of manifest locations could not be read.
    #[error("Manifest source list not found: {}", .0.display())]
    SourceListMissing(PathBuf),

    /// A source line is neither a `file://` path nor an absolute URL.
    #[error("Invalid location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    /// A local manifest file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    LocalRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Transport failure or non-success HTTP status.
    #[error("{}", format_http_error(url, *status, message))]
    Http { url: String, status: Option<u16>, message: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// A built-in schema failed to compile.
    #[error("Invalid schema: {0}")]
    Schema(String),

    /// JSON serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn format_http_error(url: &str, status: Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {} for url {}: {}", code, url, message),
        None => format!("Request to {} failed: {}", url, message),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn http_status(url: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        AppError::Http { url: url.into(), status: Some(status), message: message.into() }
    }

    pub fn http_transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Http { url: url.into(), status: None, message: message.into() }
    }

    /// Status code carried by an HTTP error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => *status,
            _ => None,
        }
    }
}
