//! Application-level configuration.
//!
//! [`InvestigationConfig`] carries the caller's tier and profile
//! selections; [`validation`] holds the issue/severity model used when
//! checking a combination.

mod investigation_config;
pub mod validation;

pub use investigation_config::InvestigationConfig;
pub use validation::{ConfigIssue, ConfigIssueCode, Severity};
