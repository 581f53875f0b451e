//! Configuration file loading for growth-index
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `GROWTH_INDEX_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./growth-index.toml` or `./.growth-index.toml`
//! 4. Global: `$XDG_CONFIG_HOME/growth-index/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, EmailTransportKind, FileConfig, FileEmailConfig, FileOutboxConfig,
    FileOutputConfig, FileSendGridConfig, FileSmtpConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
