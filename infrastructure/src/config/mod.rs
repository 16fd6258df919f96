//! Configuration file loading for cardiacheck
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CARDIACHECK_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./cardiacheck.toml` or `./.cardiacheck.toml`
//! 4. Global: `<config dir>/cardiacheck/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig, FileUiConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
