//! Manifest source locations.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::domain::AppError;

const FILE_PREFIX: &str = "file://";

/// Where a manifest is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestLocation {
    /// `file://<path>`; the prefix is stripped as-is so relative paths work.
    Local(PathBuf),
    /// Any absolute URL fetched over HTTP.
    Remote(Url),
}

impl ManifestLocation {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let raw = raw.trim();
        if let Some(path) = raw.strip_prefix(FILE_PREFIX) {
            if path.is_empty() {
                return Err(AppError::InvalidLocation {
                    location: raw.to_string(),
                    reason: "empty file path".into(),
                });
            }
            return Ok(ManifestLocation::Local(PathBuf::from(path)));
        }

        Url::parse(raw).map(ManifestLocation::Remote).map_err(|e| AppError::InvalidLocation {
            location: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

impl fmt::Display for ManifestLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestLocation::Local(path) => write!(f, "{}{}", FILE_PREFIX, path.display()),
            ManifestLocation::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Non-blank, trimmed lines of a source list, in order.
pub fn source_lines(content: &str) -> Vec<&str> {
    content.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
}
