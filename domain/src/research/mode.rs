//! Research mode presets.
//!
//! A [`ResearchMode`] bundles the search, reasoning, and analysis
//! configuration for one [`ResearchTier`], together with the display
//! metadata shown when a tier is selected. The three presets form a
//! thoroughness ladder: every capability Standard enables, Deep enables
//! too, and Ultra enables everything Deep does plus legal case
//! construction.

use serde::{Deserialize, Serialize};

use crate::core::model::ReasoningModel;
use crate::research::analysis::AnalysisConfig;
use crate::research::reasoning::ReasoningConfig;
use crate::research::search::{Language, Region, SearchConfig, SearchEngine, TimeRange};
use crate::research::tier::ResearchTier;

/// A fully populated research mode preset.
///
/// Constructed once per tier by [`ResearchMode::for_tier`]; never
/// partially populated and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchMode {
    /// Tier this preset belongs to
    pub tier: ResearchTier,
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// Web search stage configuration
    pub search: SearchConfig,
    /// Reasoning stage configuration
    pub reasoning: ReasoningConfig,
    /// Analysis stage configuration
    pub analysis: AnalysisConfig,
    /// Expected wall-clock time, for display
    pub estimated_time: String,
    /// Expected cost range in USD, for display
    pub cost_estimate: String,
    /// Scenarios this tier is suited for
    pub ideal_for: Vec<String>,
}

impl ResearchMode {
    /// Get the preset for a tier.
    ///
    /// Total over the closed [`ResearchTier`] enumeration; there is no
    /// error path.
    pub fn for_tier(tier: ResearchTier) -> ResearchMode {
        match tier {
            ResearchTier::Standard => Self::standard(),
            ResearchTier::Deep => Self::deep(),
            ResearchTier::Ultra => Self::ultra(),
        }
    }

    /// Standard mode: fast and efficient for basic analysis.
    pub fn standard() -> ResearchMode {
        ResearchMode {
            tier: ResearchTier::Standard,
            name: "Standard Research".to_string(),
            description: "Quick investigation for basic analysis".to_string(),
            search: SearchConfig::new(
                5,
                vec![SearchEngine::Tavily, SearchEngine::Google],
                vec![Language::Spanish],
                Region::Colombia,
                TimeRange::Recent,
            ),
            reasoning: ReasoningConfig::new(ReasoningModel::Gpt4o, 0.1, 3, false, true),
            analysis: AnalysisConfig::new(true, false, true, true, false),
            estimated_time: "2-5 minutes".to_string(),
            cost_estimate: "$0.10-0.50".to_string(),
            ideal_for: vec![
                "Quick contractor verification".to_string(),
                "Basic due diligence".to_string(),
                "Initial exploratory analysis".to_string(),
            ],
        }
    }

    /// Deep mode: in-depth investigation with multi-stage reasoning.
    pub fn deep() -> ResearchMode {
        ResearchMode {
            tier: ResearchTier::Deep,
            name: "Deep Research".to_string(),
            description: "In-depth investigation with multi-stage reasoning".to_string(),
            search: SearchConfig::new(
                50,
                vec![
                    SearchEngine::Tavily,
                    SearchEngine::Google,
                    SearchEngine::Bing,
                    SearchEngine::Academic,
                ],
                vec![Language::Spanish, Language::English],
                Region::Colombia,
                TimeRange::Any,
            )
            .with_academic_sources()
            .with_social_media(),
            reasoning: ReasoningConfig::new(ReasoningModel::O1Preview, 0.1, 10, true, true)
                .with_multi_perspective_analysis()
                .with_temporal_reasoning(),
            analysis: AnalysisConfig::new(true, true, true, true, true)
                .with_financial_flow_analysis(),
            estimated_time: "30-60 minutes".to_string(),
            cost_estimate: "$5-15".to_string(),
            ideal_for: vec![
                "Deep journalistic investigations".to_string(),
                "Advanced government due diligence".to_string(),
                "Complex corruption scheme detection".to_string(),
                "Business network analysis".to_string(),
            ],
        }
    }

    /// Ultra mode: exhaustive autonomous investigation.
    pub fn ultra() -> ResearchMode {
        ResearchMode {
            tier: ResearchTier::Ultra,
            name: "Ultra Research".to_string(),
            description: "Exhaustive autonomous investigation with legal case construction"
                .to_string(),
            search: SearchConfig::new(
                200,
                vec![
                    SearchEngine::Tavily,
                    SearchEngine::Google,
                    SearchEngine::Bing,
                    SearchEngine::Academic,
                    SearchEngine::Legal,
                    SearchEngine::Government,
                ],
                vec![Language::Spanish, Language::English, Language::Portuguese],
                Region::Latam,
                TimeRange::Comprehensive,
            )
            .with_academic_sources()
            .with_social_media(),
            reasoning: ReasoningConfig::new(ReasoningModel::O1Pro, 0.05, 25, true, true)
                .with_multi_perspective_analysis()
                .with_temporal_reasoning(),
            analysis: AnalysisConfig::new(true, true, true, true, true)
                .with_legal_case_construction()
                .with_financial_flow_analysis(),
            estimated_time: "4-8 hours".to_string(),
            cost_estimate: "$50-200".to_string(),
            ideal_for: vec![
                "Complex corruption cases".to_string(),
                "Multi-company investigations".to_string(),
                "Legal case construction".to_string(),
                "Government policy analysis".to_string(),
                "Cross-border investigations".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The boolean flags where a deeper tier must never disable what a
    /// shallower tier enables.
    fn thoroughness_flags(mode: &ResearchMode) -> Vec<(&'static str, bool)> {
        vec![
            ("use_academic_sources", mode.search.use_academic_sources),
            ("include_social_media", mode.search.include_social_media),
            ("hypothesis_generation", mode.reasoning.hypothesis_generation),
            ("evidence_correlation", mode.reasoning.evidence_correlation),
            (
                "multi_perspective_analysis",
                mode.reasoning.multi_perspective_analysis,
            ),
            ("temporal_reasoning", mode.reasoning.temporal_reasoning),
            ("network_analysis", mode.analysis.network_analysis),
            ("temporal_analysis", mode.analysis.temporal_analysis),
            ("risk_assessment", mode.analysis.risk_assessment),
            ("pattern_detection", mode.analysis.pattern_detection),
            ("predictive_modeling", mode.analysis.predictive_modeling),
            (
                "legal_case_construction",
                mode.analysis.legal_case_construction,
            ),
            (
                "financial_flow_analysis",
                mode.analysis.financial_flow_analysis,
            ),
        ]
    }

    #[test]
    fn test_for_tier_dispatch() {
        for tier in ResearchTier::all() {
            let mode = ResearchMode::for_tier(tier);
            assert_eq!(mode.tier, tier);
        }
    }

    #[test]
    fn test_standard_preset() {
        let mode = ResearchMode::standard();
        assert_eq!(mode.name, "Standard Research");
        assert_eq!(mode.search.max_searches, 5);
        assert_eq!(mode.search.engines.len(), 2);
        assert_eq!(mode.search.languages, vec![Language::Spanish]);
        assert_eq!(mode.search.geographic_focus, Region::Colombia);
        assert_eq!(mode.search.time_range, TimeRange::Recent);
        assert_eq!(mode.reasoning.model, ReasoningModel::Gpt4o);
        assert_eq!(mode.reasoning.max_reasoning_steps, 3);
        assert!(!mode.reasoning.hypothesis_generation);
        assert_eq!(mode.cost_estimate, "$0.10-0.50");
        assert_eq!(mode.ideal_for.len(), 3);
    }

    #[test]
    fn test_deep_preset() {
        let mode = ResearchMode::deep();
        assert_eq!(mode.search.max_searches, 50);
        assert_eq!(mode.search.time_range, TimeRange::Any);
        assert_eq!(mode.reasoning.model, ReasoningModel::O1Preview);
        assert_eq!(mode.reasoning.max_reasoning_steps, 10);
        assert!(mode.analysis.financial_flow_analysis);
        assert!(!mode.analysis.legal_case_construction);
        assert_eq!(mode.estimated_time, "30-60 minutes");
    }

    #[test]
    fn test_ultra_preset() {
        let mode = ResearchMode::ultra();
        assert_eq!(mode.search.max_searches, 200);
        assert_eq!(mode.search.engines.len(), 6);
        assert!(mode.search.engines.contains(&SearchEngine::Legal));
        assert!(mode.search.engines.contains(&SearchEngine::Government));
        assert_eq!(
            mode.search.languages,
            vec![Language::Spanish, Language::English, Language::Portuguese]
        );
        assert_eq!(mode.search.geographic_focus, Region::Latam);
        assert_eq!(mode.reasoning.model, ReasoningModel::O1Pro);
        assert_eq!(mode.reasoning.temperature, 0.05);
        assert_eq!(mode.reasoning.max_reasoning_steps, 25);
        assert!(mode.analysis.legal_case_construction);
        assert_eq!(mode.ideal_for.len(), 5);
    }

    #[test]
    fn test_deeper_tiers_never_disable_capabilities() {
        let tiers = ResearchTier::all();
        for pair in tiers.windows(2) {
            let shallow = ResearchMode::for_tier(pair[0]);
            let deep = ResearchMode::for_tier(pair[1]);
            for ((name, shallow_on), (_, deep_on)) in thoroughness_flags(&shallow)
                .into_iter()
                .zip(thoroughness_flags(&deep))
            {
                assert!(
                    deep_on || !shallow_on,
                    "{} enabled in {} but disabled in {}",
                    name,
                    pair[0],
                    pair[1]
                );
            }
            assert!(deep.search.max_searches > shallow.search.max_searches);
            assert!(
                deep.reasoning.max_reasoning_steps > shallow.reasoning.max_reasoning_steps
            );
        }
    }

    #[test]
    fn test_presets_are_idempotent() {
        for tier in ResearchTier::all() {
            assert_eq!(ResearchMode::for_tier(tier), ResearchMode::for_tier(tier));
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let mode = ResearchMode::ultra();
        let json = serde_json::to_string(&mode).unwrap();
        let back: ResearchMode = serde_json::from_str(&json).unwrap();
        assert_eq!(mode, back);
    }
}
