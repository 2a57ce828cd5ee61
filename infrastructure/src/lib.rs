//! Infrastructure layer for vigia
//!
//! This crate contains the adapters around the catalog, currently the
//! configuration file loading that turns `vigia.toml` settings into an
//! [`InvestigationConfig`](vigia_application::InvestigationConfig)
//! starting point.

pub mod config;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, FileResearchConfig,
};
