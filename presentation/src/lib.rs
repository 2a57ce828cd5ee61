//! Presentation layer for vigia
//!
//! This crate contains the CLI definitions and the console/JSON output
//! formatters for catalog records.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
