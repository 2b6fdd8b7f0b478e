//! Bundle configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BundleConfig};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sources: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub token_env: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Load `path` if given (it must exist), otherwise start from defaults, then
/// apply `overrides`.
pub fn load_config(
    path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<BundleConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let content = fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => BundleConfig::default(),
    };

    if let Some(sources) = overrides.sources {
        config.sources = sources;
    }
    if let Some(output) = overrides.output {
        config.output = output;
    }
    if let Some(token_env) = overrides.token_env {
        config.token_env = token_env;
    }
    if overrides.timeout_secs.is_some() {
        config.timeout_secs = overrides.timeout_secs;
    }

    if config.token_env.trim().is_empty() {
        return Err(AppError::config_error("token_env must name an environment variable"));
    }
    if config.timeout_secs == Some(0) {
        return Err(AppError::config_error("timeout_secs must be greater than zero"));
    }

    Ok(config)
}
