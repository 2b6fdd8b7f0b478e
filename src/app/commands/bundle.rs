//! Fetch, validate and bundle every listed manifest.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::app::services::fetcher::fetch_json;
use crate::app::services::validator::Validator;
use crate::domain::{
    AppError, BundleConfig, LinkCache, ManifestLocation, Schema, SchemaSet, source_lines,
};
use crate::ports::HttpTransport;

/// Failure label used for the aggregate check.
pub const AGGREGATE: &str = "<aggregate>";

/// A location (or the aggregate) that did not make it into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFailure {
    pub location: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BundleOutcome {
    /// Locations whose manifests were bundled, in source order.
    pub included: Vec<String>,
    pub failures: Vec<BundleFailure>,
    /// Path written, if the aggregate validated.
    pub output: Option<PathBuf>,
}

impl BundleOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.failures.is_empty() && self.output.is_some() { 0 } else { 1 }
    }

    fn record_failure(&mut self, location: impl Into<String>, reason: impl ToString) {
        self.failures.push(BundleFailure { location: location.into(), reason: reason.to_string() });
    }
}

/// Run the whole pipeline for `config`.
///
/// Only an unreadable source list, a broken built-in schema or a failed output
/// write escape as errors; every per-location problem is recorded in the outcome.
pub fn execute<T: HttpTransport + ?Sized>(
    transport: &T,
    config: &BundleConfig,
) -> Result<BundleOutcome, AppError> {
    let content = fs::read_to_string(&config.sources)
        .map_err(|_| AppError::SourceListMissing(config.sources.clone()))?;
    let schemas = SchemaSet::compile()?;
    let validator = Validator::new(&schemas, transport);
    let mut cache = LinkCache::new();
    let mut collection = Vec::new();
    let mut outcome = BundleOutcome::default();

    for location in source_lines(&content) {
        match load_manifest(transport, &validator, &mut cache, location) {
            Ok(manifest) => {
                collection.push(manifest);
                outcome.included.push(location.to_string());
            }
            Err(reason) => outcome.record_failure(location, reason),
        }
    }

    println!("Validating the concatenated JSON");
    let aggregate = Value::Array(collection);
    match validator.validate(&aggregate, Schema::Collection, &mut cache) {
        Ok(()) => {
            write_collection(&config.output, &aggregate)?;
            println!(
                "All JSON data has been concatenated and saved to {}.",
                config.output.display()
            );
            outcome.output = Some(config.output.clone());
        }
        Err(failure) => {
            eprintln!("Error: the concatenated JSON is invalid");
            outcome.record_failure(AGGREGATE, failure);
        }
    }

    print_summary(&outcome);
    Ok(outcome)
}

/// Fetch and validate one source line. The error is the reason it was excluded.
pub(crate) fn load_manifest<T: HttpTransport + ?Sized>(
    transport: &T,
    validator: &Validator<'_, T>,
    cache: &mut LinkCache,
    location: &str,
) -> Result<Value, String> {
    println!("Fetching {}", location);
    let manifest = match ManifestLocation::parse(location)
        .and_then(|parsed| fetch_json(transport, &parsed))
    {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error fetching {}: {}", location, e);
            return Err(e.to_string());
        }
    };

    if let Err(failure) = validator.validate(&manifest, Schema::Manifest, cache) {
        eprintln!("Validation failed for {}", location);
        return Err(failure.to_string());
    }
    Ok(manifest)
}

/// Four-space indented JSON, parent directories created as needed.
fn write_collection(path: &Path, collection: &Value) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    collection.serialize(&mut serializer)?;

    let mut file = fs::File::create(path)?;
    file.write_all(&buffer)?;
    Ok(())
}

fn print_summary(outcome: &BundleOutcome) {
    let attempted = outcome.included.len()
        + outcome.failures.iter().filter(|failure| failure.location != AGGREGATE).count();

    if outcome.failures.is_empty() {
        println!("✅ Bundled {} of {} manifest(s)", outcome.included.len(), attempted);
        return;
    }

    eprintln!("⚠️  {} failure(s):", outcome.failures.len());
    for failure in &outcome.failures {
        eprintln!("  • {}: {}", failure.location, failure.reason);
    }
}
