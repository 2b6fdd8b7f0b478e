//! HTTP transport port definition.

use serde_json::Value;
use url::Url;

use crate::domain::AppError;

/// Port for the two network operations the bundle needs.
pub trait HttpTransport {
    /// Existence check without a body transfer. `Ok` means reachable.
    fn head(&self, url: &Url) -> Result<(), AppError>;

    /// Retrieve a document and parse its body as JSON.
    fn get_json(&self, url: &Url) -> Result<Value, AppError>;
}
