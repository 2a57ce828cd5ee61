//! Investigation configuration container.
//!
//! [`InvestigationConfig`] groups the caller's selections — tier plus
//! optional sector and jurisdiction keys — and validates the combination
//! before a plan is built. The tier is a closed enum; sector and
//! jurisdiction stay open string keys with empty-profile-on-miss
//! semantics, so validation reports misses as warnings rather than
//! failing.

use serde::{Deserialize, Serialize};
use vigia_domain::{JurisdictionProfile, ResearchMode, ResearchTier, SectorProfile};

use crate::config::validation::{ConfigIssue, ConfigIssueCode, Severity};

/// Caller-facing configuration for one investigation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestigationConfig {
    tier: ResearchTier,
    sector: Option<String>,
    jurisdiction: Option<String>,
}

impl InvestigationConfig {
    /// Create a config for a tier with no profile overlays.
    pub fn new(tier: ResearchTier) -> Self {
        Self {
            tier,
            sector: None,
            jurisdiction: None,
        }
    }

    // ==================== Accessors ====================

    pub fn tier(&self) -> ResearchTier {
        self.tier
    }

    pub fn sector(&self) -> Option<&str> {
        self.sector.as_deref()
    }

    pub fn jurisdiction(&self) -> Option<&str> {
        self.jurisdiction.as_deref()
    }

    // ==================== Builder Methods ====================

    pub fn with_tier(mut self, tier: ResearchTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    pub fn with_jurisdiction(mut self, jurisdiction: impl Into<String>) -> Self {
        self.jurisdiction = Some(jurisdiction.into());
        self
    }

    // ==================== Validation ====================

    /// Validate the configuration combination.
    ///
    /// All issues are warnings: profile misses resolve to empty profiles
    /// and a language gap only narrows coverage. Nothing here can make a
    /// plan unbuildable.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Some(sector) = self.sector() {
            if SectorProfile::lookup(sector).is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownSector,
                    format!("Unknown sector '{sector}': no sector profile will be applied"),
                ));
            }
        }

        if let Some(jurisdiction) = self.jurisdiction() {
            let profile = JurisdictionProfile::lookup(jurisdiction);
            if profile.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnknownJurisdiction,
                    format!(
                        "Unknown jurisdiction '{jurisdiction}': no jurisdiction profile will be applied"
                    ),
                ));
            } else {
                let mode = ResearchMode::for_tier(self.tier);
                for language in &profile.search_languages {
                    if !mode.search.covers_language(*language) {
                        issues.push(ConfigIssue::warning(
                            ConfigIssueCode::LanguageGap,
                            format!(
                                "Jurisdiction '{jurisdiction}' searches in '{language}' but the {} tier does not",
                                self.tier
                            ),
                        ));
                    }
                }
            }
        }

        issues
    }

    /// Check whether any issues are errors (i.e. fatal).
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = InvestigationConfig::default();
        assert_eq!(config.tier(), ResearchTier::Standard);
        assert!(config.sector().is_none());
        assert!(config.jurisdiction().is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = InvestigationConfig::new(ResearchTier::Deep)
            .with_sector("healthcare")
            .with_jurisdiction("colombia");

        assert_eq!(config.tier(), ResearchTier::Deep);
        assert_eq!(config.sector(), Some("healthcare"));
        assert_eq!(config.jurisdiction(), Some("colombia"));
    }

    #[test]
    fn test_validate_clean_combination() {
        let config = InvestigationConfig::new(ResearchTier::Standard)
            .with_sector("infrastructure")
            .with_jurisdiction("colombia");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_unknown_sector_warns() {
        let config = InvestigationConfig::new(ResearchTier::Standard).with_sector("fintech");
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].code, ConfigIssueCode::UnknownSector);
        assert!(!InvestigationConfig::has_errors(&issues));
    }

    #[test]
    fn test_validate_unknown_jurisdiction_warns() {
        let config =
            InvestigationConfig::new(ResearchTier::Ultra).with_jurisdiction("atlantis");
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::UnknownJurisdiction);
    }

    #[test]
    fn test_validate_language_gap() {
        // Standard searches only in Spanish; Brazil searches in Portuguese
        let config =
            InvestigationConfig::new(ResearchTier::Standard).with_jurisdiction("brazil");
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::LanguageGap);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_no_language_gap_at_ultra() {
        // Ultra covers es, en, pt
        let config =
            InvestigationConfig::new(ResearchTier::Ultra).with_jurisdiction("brazil");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_has_errors_false_for_warnings_only() {
        let config = InvestigationConfig::new(ResearchTier::Standard).with_sector("fintech");
        assert!(!InvestigationConfig::has_errors(&config.validate()));
    }
}
