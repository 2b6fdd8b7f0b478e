//! Reachability checks for asset links.

use url::Url;

use crate::domain::{AppError, LinkCache};
use crate::ports::HttpTransport;

/// Issues HEAD probes through the transport, skipping URLs already in the cache.
pub struct LinkChecker<'t, T: HttpTransport + ?Sized> {
    transport: &'t T,
}

impl<'t, T: HttpTransport + ?Sized> LinkChecker<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    /// Succeeds when `link` answers with a non-error status.
    ///
    /// Confirmed links are added to `cache`; failures are not cached.
    pub fn ensure_link_valid(&self, cache: &mut LinkCache, link: &str) -> Result<(), AppError> {
        if cache.contains(link) {
            return Ok(());
        }

        let url = Url::parse(link).map_err(|e| AppError::InvalidLocation {
            location: link.to_string(),
            reason: e.to_string(),
        })?;
        self.transport.head(&url)?;
        cache.insert(link);
        Ok(())
    }
}
