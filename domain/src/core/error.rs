//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant corresponds to parsing a string into one of the closed
/// catalog enumerations. Once a value is parsed, an invalid tier, engine,
/// or language is unrepresentable. Sector and jurisdiction lookups never
/// fail: an unknown key yields an empty profile, not an error.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown research tier: {0}")]
    UnknownTier(String),

    #[error("Unknown search engine: {0}")]
    UnknownEngine(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown region code: {0}")]
    UnknownRegion(String),

    #[error("Unknown time range: {0}")]
    UnknownTimeRange(String),

    #[error("Unknown risk level: {0}")]
    UnknownRiskLevel(String),
}

impl DomainError {
    /// Check if this error came from an unknown tier string
    pub fn is_unknown_tier(&self) -> bool {
        matches!(self, DomainError::UnknownTier(_))
    }
}
