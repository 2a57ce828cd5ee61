//! Domain layer for vigia
//!
//! This crate contains the research configuration catalog: immutable
//! value objects and static lookup tables for government-contractor
//! due-diligence investigations. It has no dependencies on infrastructure
//! or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Research tiers
//!
//! An investigation selects exactly one [`ResearchTier`]:
//!
//! - **Standard**: quick verification, a handful of searches
//! - **Deep**: multi-stage reasoning over a broad source set
//! - **Ultra**: exhaustive autonomous investigation
//!
//! [`ResearchMode::for_tier`] returns the fully populated preset for a
//! tier. Deeper tiers never disable a capability a shallower tier
//! enables.
//!
//! ## Pattern tables and risk weights
//!
//! The catalog also carries the corruption-detection pattern table, the
//! due-diligence checklists, and the five-factor risk weight partition
//! (weights sum to 1.0, asserted at construction).
//!
//! ## Profiles
//!
//! Sector and jurisdiction keys are open-ended: lookups return an
//! explicit empty profile on a miss, never an error. All catalog data is
//! immutable and safe for unsynchronized concurrent reads.

pub mod config;
pub mod core;
pub mod patterns;
pub mod profiles;
pub mod research;
pub mod risk;

// Re-export commonly used types
pub use self::core::{error::DomainError, model::ReasoningModel};
pub use config::OutputFormat;
pub use patterns::{
    corruption::{
        CorruptionPattern, CorruptionScheme, RiskLevel, corruption_patterns,
    },
    due_diligence::{
        DueDiligenceCategory, DueDiligenceChecklist, due_diligence_checklists,
    },
};
pub use profiles::{
    jurisdiction::JurisdictionProfile,
    sector::{RiskMultiplier, SectorProfile},
};
pub use research::{
    analysis::AnalysisConfig,
    mode::ResearchMode,
    reasoning::ReasoningConfig,
    search::{Language, Region, SearchConfig, SearchEngine, TimeRange},
    tier::ResearchTier,
};
pub use risk::{RiskFactor, RiskFactorKind, WEIGHT_EPSILON, risk_weights};
