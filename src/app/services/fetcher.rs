//! Manifest retrieval from local files or remote URLs.

use std::fs;

use serde_json::Value;

use crate::domain::{AppError, ManifestLocation};
use crate::ports::HttpTransport;

/// Read and parse the JSON document at `location`.
pub fn fetch_json<T: HttpTransport + ?Sized>(
    transport: &T,
    location: &ManifestLocation,
) -> Result<Value, AppError> {
    match location {
        ManifestLocation::Local(path) => {
            let content = fs::read_to_string(path)
                .map_err(|source| AppError::LocalRead { path: path.clone(), source })?;
            serde_json::from_str(&content).map_err(|e| AppError::Parse {
                what: path.display().to_string(),
                details: e.to_string(),
            })
        }
        ManifestLocation::Remote(url) => transport.get_json(url),
    }
}
