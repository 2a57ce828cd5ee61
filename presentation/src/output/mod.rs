//! Output formatting for catalog records

pub mod console;

pub use console::ConsoleFormatter;
