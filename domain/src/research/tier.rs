//! Research tier definitions.
//!
//! Defines [`ResearchTier`] which selects an investigation's depth and
//! cost profile:
//! - Standard: fast verification with a handful of searches
//! - Deep: multi-stage reasoning over a broad source set
//! - Ultra: exhaustive autonomous investigation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Research tier — the single user-facing depth axis.
///
/// Exactly one tier is selected per investigation. The tier fully
/// determines the search, reasoning, and analysis configuration via
/// [`ResearchMode::for_tier`](crate::research::mode::ResearchMode::for_tier);
/// fields are never partially populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResearchTier {
    /// Standard: quick investigation for basic analysis
    #[default]
    Standard,
    /// Deep: in-depth investigation with multi-stage reasoning
    Deep,
    /// Ultra: exhaustive autonomous investigation
    Ultra,
}

impl ResearchTier {
    /// All tiers, ordered from shallowest to most thorough
    pub fn all() -> [ResearchTier; 3] {
        [
            ResearchTier::Standard,
            ResearchTier::Deep,
            ResearchTier::Ultra,
        ]
    }

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            ResearchTier::Standard => {
                "Standard: quick contractor verification (2-5 minutes)"
            }
            ResearchTier::Deep => {
                "Deep: multi-stage reasoning over a broad source set (30-60 minutes)"
            }
            ResearchTier::Ultra => {
                "Ultra: exhaustive autonomous investigation (4-8 hours)"
            }
        }
    }

    /// Get a short description for display
    pub fn short_description(&self) -> &'static str {
        match self {
            ResearchTier::Standard => "Standard research",
            ResearchTier::Deep => "Deep research",
            ResearchTier::Ultra => "Ultra research",
        }
    }

    /// Check if this tier runs a deliberate reasoning model
    pub fn is_deliberate(&self) -> bool {
        !matches!(self, ResearchTier::Standard)
    }
}

impl fmt::Display for ResearchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchTier::Standard => write!(f, "standard"),
            ResearchTier::Deep => write!(f, "deep"),
            ResearchTier::Ultra => write!(f, "ultra"),
        }
    }
}

impl std::str::FromStr for ResearchTier {
    type Err = crate::core::error::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" | "std" | "s" => Ok(ResearchTier::Standard),
            "deep" | "d" => Ok(ResearchTier::Deep),
            "ultra" | "u" => Ok(ResearchTier::Ultra),
            _ => Err(crate::core::error::DomainError::UnknownTier(s.to_string())),
        }
    }
}
