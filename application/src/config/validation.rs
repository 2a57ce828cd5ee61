//! Configuration combination validation for [`InvestigationConfig`].
//!
//! Validates the cross-table consistency of a tier + sector +
//! jurisdiction selection. Profile misses are warnings, never errors:
//! an unknown key resolves to an empty profile by design, but the caller
//! probably mistyped it.
//!
//! [`InvestigationConfig`]: crate::config::InvestigationConfig

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// The sector key resolves to an empty profile.
    UnknownSector,
    /// The jurisdiction key resolves to an empty profile.
    UnknownJurisdiction,
    /// The jurisdiction searches in a language the tier does not cover.
    LanguageGap,
}

/// A detected issue in the configuration combination.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}
