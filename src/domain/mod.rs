pub mod config;
pub mod error;
pub mod link_cache;
pub mod location;
pub mod manifest;
pub mod schema;

pub use config::BundleConfig;
pub use error::AppError;
pub use link_cache::LinkCache;
pub use location::{ManifestLocation, source_lines};
pub use manifest::{DefaultFlag, Hardware, Manifest, Setting, SettingAction, SettingOption, Specs};
pub use schema::{Schema, SchemaSet, SchemaViolation};
