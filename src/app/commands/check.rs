//! Validate individual manifests without producing a bundle.

use crate::app::commands::bundle::{BundleFailure, load_manifest};
use crate::app::services::validator::Validator;
use crate::domain::{AppError, LinkCache, SchemaSet};
use crate::ports::HttpTransport;

#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    pub passed: Vec<String>,
    pub failures: Vec<BundleFailure>,
}

impl CheckOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.failures.is_empty() { 0 } else { 1 }
    }
}

/// Fetch and validate each location exactly as a bundle run would.
pub fn execute<T: HttpTransport + ?Sized>(
    transport: &T,
    locations: &[String],
) -> Result<CheckOutcome, AppError> {
    if locations.is_empty() {
        return Err(AppError::config_error("No manifest locations given"));
    }

    let schemas = SchemaSet::compile()?;
    let validator = Validator::new(&schemas, transport);
    let mut cache = LinkCache::new();
    let mut outcome = CheckOutcome::default();

    for location in locations.iter().map(|location| location.trim()) {
        if location.is_empty() {
            continue;
        }
        match load_manifest(transport, &validator, &mut cache, location) {
            Ok(_) => outcome.passed.push(location.to_string()),
            Err(reason) => {
                outcome.failures.push(BundleFailure { location: location.to_string(), reason })
            }
        }
    }

    if outcome.failures.is_empty() {
        println!("✅ {} manifest(s) passed", outcome.passed.len());
    } else {
        eprintln!(
            "Check failed: {} of {} manifest(s) rejected.",
            outcome.failures.len(),
            outcome.passed.len() + outcome.failures.len()
        );
    }
    Ok(outcome)
}
