//! Configuration loading.
//!
//! The configuration model lives in `domain::config`; this module resolves it
//! from an optional TOML file and command-line overrides.

mod load_config;

pub use load_config::{ConfigOverrides, load_config};
