//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for catalog records
///
/// This is a domain concept representing how a record should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full formatted record (default)
    Full,
    /// One-line summary per record
    Summary,
    /// JSON output
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Full
    }
}
