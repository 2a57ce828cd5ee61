//! Plan investigation use case.
//!
//! Resolves an [`InvestigationConfig`] into the concrete
//! [`InvestigationPlan`] an orchestrator consumes: the tier's research
//! mode with the sector and jurisdiction profiles layered on top, plus
//! the risk-weight table for the scoring stage. The use case is pure —
//! it reads the catalog and combines records, nothing more.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vigia_domain::{
    JurisdictionProfile, Language, ResearchMode, RiskFactor, SectorProfile, risk_weights,
};

use crate::config::{ConfigIssue, InvestigationConfig};

/// The resolved plan for one investigation.
///
/// Everything an orchestrator needs in one record: the tier preset, the
/// profile overlays (empty on a key miss), and the risk weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestigationPlan {
    /// Tier preset driving search, reasoning, and analysis
    pub mode: ResearchMode,
    /// Sector overlay; empty if no sector was selected or the key missed
    pub sector: SectorProfile,
    /// Jurisdiction overlay; empty if none selected or the key missed
    pub jurisdiction: JurisdictionProfile,
    /// Risk-weight table for the scoring stage
    pub risk_weights: Vec<RiskFactor>,
}

impl InvestigationPlan {
    /// Languages to search in: the tier's languages plus any the
    /// jurisdiction adds, in that order, without duplicates.
    pub fn effective_languages(&self) -> Vec<Language> {
        let mut languages = self.mode.search.languages.clone();
        for language in &self.jurisdiction.search_languages {
            if !languages.contains(language) {
                languages.push(*language);
            }
        }
        languages
    }

    /// Data sources to query: the jurisdiction's portals plus the
    /// sector's specialized sources, in that order.
    pub fn data_sources(&self) -> Vec<String> {
        let mut sources = self.jurisdiction.data_sources.clone();
        sources.extend(self.sector.specialized_sources.iter().cloned());
        sources
    }
}

/// Use case: resolve a configuration into an investigation plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanInvestigationUseCase;

impl PlanInvestigationUseCase {
    pub fn new() -> Self {
        Self
    }

    /// Build the plan for a configuration.
    ///
    /// Returns the plan together with any combination warnings. The plan
    /// is always built: profile misses resolve to empty overlays.
    pub fn execute(
        &self,
        config: &InvestigationConfig,
    ) -> (InvestigationPlan, Vec<ConfigIssue>) {
        let issues = config.validate();

        let mode = ResearchMode::for_tier(config.tier());
        let sector = config
            .sector()
            .map(SectorProfile::lookup)
            .unwrap_or_default();
        let jurisdiction = config
            .jurisdiction()
            .map(JurisdictionProfile::lookup)
            .unwrap_or_default();

        debug!(
            tier = %config.tier(),
            sector_applied = !sector.is_empty(),
            jurisdiction_applied = !jurisdiction.is_empty(),
            warnings = issues.len(),
            "resolved investigation plan"
        );

        let plan = InvestigationPlan {
            mode,
            sector,
            jurisdiction,
            risk_weights: risk_weights().to_vec(),
        };

        (plan, issues)
    }
}
