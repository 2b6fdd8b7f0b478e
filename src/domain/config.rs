//! Bundle configuration domain model.

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_SOURCES: &str = "manifests";
pub const DEFAULT_OUTPUT: &str = "manifest_all_v1.1.0.json";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Configuration for one bundle run, optionally loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleConfig {
    /// Newline-delimited list of manifest locations.
    #[serde(default = "default_sources")]
    pub sources: PathBuf,
    /// Where the bundled collection is written.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Environment variable holding the bearer credential.
    #[serde(default = "default_token_env")]
    pub token_env: String,
    /// Per-request timeout in seconds; the transport default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output: default_output(),
            token_env: default_token_env(),
            timeout_secs: None,
        }
    }
}

impl BundleConfig {
    /// Read the bearer credential from the configured environment variable.
    ///
    /// Unset and empty values both mean "unauthenticated".
    pub fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.token_env).ok().filter(|token| !token.trim().is_empty())
    }
}

fn default_sources() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCES)
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}
