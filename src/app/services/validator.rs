//! Schema and link validation for manifests and the bundled collection.

use serde_json::Value;
use thiserror::Error;

use crate::app::services::link_checker::LinkChecker;
use crate::domain::{AppError, LinkCache, Manifest, Schema, SchemaSet, SchemaViolation};
use crate::ports::HttpTransport;

/// Why a document was rejected.
#[derive(Debug, Error)]
pub enum ValidationFailure {
    #[error("JSON validation error: {0}")]
    Schema(SchemaViolation),

    #[error("{0}")]
    Model(AppError),

    #[error("Error checking manifest link {url}: {source}")]
    Link {
        url: String,
        #[source]
        source: AppError,
    },
}

pub struct Validator<'a, T: HttpTransport + ?Sized> {
    schemas: &'a SchemaSet,
    links: LinkChecker<'a, T>,
}

impl<'a, T: HttpTransport + ?Sized> Validator<'a, T> {
    pub fn new(schemas: &'a SchemaSet, transport: &'a T) -> Self {
        Self { schemas, links: LinkChecker::new(transport) }
    }

    /// Structural check, plus asset link checks when `schema` is [`Schema::Manifest`].
    pub fn check(
        &self,
        value: &Value,
        schema: Schema,
        cache: &mut LinkCache,
    ) -> Result<(), ValidationFailure> {
        self.schemas.check(value, schema).map_err(ValidationFailure::Schema)?;

        if schema == Schema::Manifest {
            let manifest = Manifest::from_value(value).map_err(ValidationFailure::Model)?;
            for link in manifest.asset_links() {
                self.links
                    .ensure_link_valid(cache, link)
                    .map_err(|source| ValidationFailure::Link { url: link.to_string(), source })?;
            }
        }
        Ok(())
    }

    /// [`Validator::check`], reporting the outcome on the console.
    pub fn validate(
        &self,
        value: &Value,
        schema: Schema,
        cache: &mut LinkCache,
    ) -> Result<(), ValidationFailure> {
        let result = self.check(value, schema, cache);
        match &result {
            Ok(()) => println!("JSON is valid"),
            Err(ValidationFailure::Schema(violation)) => {
                eprintln!("JSON validation error: {}", violation.message);
                eprintln!("Error location: {}", violation.location());
            }
            Err(failure) => {
                println!("JSON is valid");
                eprintln!("{}", failure);
            }
        }
        result
    }

    /// Validity signal only; never fails the caller.
    pub fn validate_json(&self, value: &Value, schema: Schema, cache: &mut LinkCache) -> bool {
        self.validate(value, schema, cache).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTransport, sample_manifest};
    use serde_json::json;

    fn schemas() -> SchemaSet {
        SchemaSet::compile().unwrap()
    }

    #[test]
    fn valid_manifest_checks_every_asset_link() {
        let schemas = schemas();
        let transport = FakeTransport::new();
        let validator = Validator::new(&schemas, &transport);
        let mut cache = LinkCache::new();

        assert!(validator.validate_json(
            &sample_manifest("https://assets.test"),
            Schema::Manifest,
            &mut cache
        ));
        assert_eq!(
            transport.head_requests(),
            vec![
                "https://assets.test/repo.git",
                "https://assets.test/logo.png",
                "https://assets.test/logo-dark.png",
                "https://assets.test/board.png",
            ]
        );
    }

    #[test]
    fn purchase_links_are_checked() {
        let schemas = schemas();
        let transport = FakeTransport::new().with_broken_link("https://shop.test/buy");
        let validator = Validator::new(&schemas, &transport);
        let mut value = sample_manifest("https://assets.test");
        value["buy_now_links"] = json!(["https://shop.test/buy"]);

        let failure = validator.check(&value, Schema::Manifest, &mut LinkCache::new()).unwrap_err();
        match failure {
            ValidationFailure::Link { url, .. } => assert_eq!(url, "https://shop.test/buy"),
            other => panic!("unexpected failure: {other}"),
        }
    }

    #[test]
    fn broken_image_link_names_the_url() {
        let schemas = schemas();
        let transport = FakeTransport::new().with_broken_link("https://assets.test/board.png");
        let validator = Validator::new(&schemas, &transport);

        let failure = validator
            .check(&sample_manifest("https://assets.test"), Schema::Manifest, &mut LinkCache::new())
            .unwrap_err();

        assert!(failure.to_string().contains("https://assets.test/board.png"));
        assert!(!validator.validate_json(
            &sample_manifest("https://assets.test"),
            Schema::Manifest,
            &mut LinkCache::new()
        ));
    }

    #[test]
    fn schema_failure_skips_link_checks() {
        let schemas = schemas();
        let transport = FakeTransport::new();
        let validator = Validator::new(&schemas, &transport);
        let mut value = sample_manifest("https://assets.test");
        value["hardware"]["specs"].as_object_mut().unwrap().remove("Flash");

        let failure = validator.check(&value, Schema::Manifest, &mut LinkCache::new()).unwrap_err();

        match failure {
            ValidationFailure::Schema(violation) => {
                assert_eq!(violation.location(), "hardware -> specs")
            }
            other => panic!("unexpected failure: {other}"),
        }
        assert!(transport.head_requests().is_empty());
    }

    #[test]
    fn collection_schema_never_checks_links() {
        let schemas = schemas();
        let transport = FakeTransport::new().with_broken_link("https://assets.test/board.png");
        let validator = Validator::new(&schemas, &transport);
        let collection = json!([sample_manifest("https://assets.test")]);

        assert!(validator.validate_json(&collection, Schema::Collection, &mut LinkCache::new()));
        assert!(transport.head_requests().is_empty());
    }

    #[test]
    fn shared_links_across_manifests_are_probed_once() {
        let schemas = schemas();
        let transport = FakeTransport::new();
        let validator = Validator::new(&schemas, &transport);
        let mut cache = LinkCache::new();

        let first = sample_manifest("https://assets.test");
        let mut second = sample_manifest("https://assets.test");
        second["image"] = json!("https://assets.test/other-board.png");

        assert!(validator.validate_json(&first, Schema::Manifest, &mut cache));
        assert!(validator.validate_json(&second, Schema::Manifest, &mut cache));

        assert_eq!(transport.head_requests().len(), 5);
    }
}
