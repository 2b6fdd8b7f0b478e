//! manifest-bundle: validate board manifests and bundle them into one JSON index.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use serde_json::Value;

use adapters::ReqwestTransport;
use app::commands::bundle as bundle_command;
use app::commands::check as check_command;

pub use app::commands::bundle::{BundleFailure, BundleOutcome};
pub use app::commands::check::CheckOutcome;
pub use app::config::{ConfigOverrides, load_config};
pub use domain::{AppError, BundleConfig, Schema};

/// Fetch, validate and bundle every manifest listed in `config.sources`.
///
/// Per-manifest failures are reported on the console and collected in the
/// returned outcome; use [`BundleOutcome::exit_code`] for the process status.
pub fn bundle(config: &BundleConfig) -> Result<BundleOutcome, AppError> {
    let transport = transport(config)?;
    bundle_command::execute(&transport, config)
}

/// Validate the given manifest locations without writing a bundle.
pub fn check(config: &BundleConfig, locations: &[String]) -> Result<CheckOutcome, AppError> {
    let transport = transport(config)?;
    check_command::execute(&transport, locations)
}

/// The JSON Schema document for `schema`.
pub fn schema(schema: Schema) -> Value {
    schema.definition()
}

fn transport(config: &BundleConfig) -> Result<ReqwestTransport, AppError> {
    let token = config.bearer_token();
    if token.is_none() {
        println!("⚠️ warning: no {} in env. request limit may be exceeded", config.token_env);
    }
    ReqwestTransport::new(token, config.timeout_secs.map(Duration::from_secs))
}
