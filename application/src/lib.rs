//! Application layer for vigia
//!
//! This crate contains the investigation configuration container, its
//! combination validation, and the planning use case. It depends only on
//! the domain layer.

pub mod config;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, InvestigationConfig, Severity};
pub use use_cases::{InvestigationPlan, PlanInvestigationUseCase};
