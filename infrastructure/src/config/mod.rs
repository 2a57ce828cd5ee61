//! Configuration file loading for vigia
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./vigia.toml` or `./.vigia.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/vigia/config.toml`
//! 4. Fallback: `~/.config/vigia/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileOutputConfig, FileResearchConfig,
};
pub use loader::ConfigLoader;
