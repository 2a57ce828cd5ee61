//! Reasoning engine configuration

use serde::{Deserialize, Serialize};

use crate::core::model::ReasoningModel;

/// Configuration for the reasoning stage of an investigation.
///
/// Temperature is kept in `[0.0, 1.0]`; the catalog tiers use low values
/// (0.05-0.1) because investigative output must be reproducible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    /// Model that drives the reasoning stage
    pub model: ReasoningModel,
    /// Sampling temperature, in [0.0, 1.0]
    pub temperature: f64,
    /// Maximum reasoning steps before the stage must conclude
    pub max_reasoning_steps: u32,
    /// Generate and test hypotheses about the subject
    pub hypothesis_generation: bool,
    /// Correlate evidence across sources
    pub evidence_correlation: bool,
    /// Analyze the subject from multiple perspectives
    pub multi_perspective_analysis: bool,
    /// Reason over event timelines
    pub temporal_reasoning: bool,
}

impl ReasoningConfig {
    /// Create a reasoning config with the thoroughness flags off.
    pub fn new(
        model: ReasoningModel,
        temperature: f64,
        max_reasoning_steps: u32,
        hypothesis_generation: bool,
        evidence_correlation: bool,
    ) -> Self {
        debug_assert!((0.0..=1.0).contains(&temperature));
        Self {
            model,
            temperature,
            max_reasoning_steps,
            hypothesis_generation,
            evidence_correlation,
            multi_perspective_analysis: false,
            temporal_reasoning: false,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_multi_perspective_analysis(mut self) -> Self {
        self.multi_perspective_analysis = true;
        self
    }

    pub fn with_temporal_reasoning(mut self) -> Self {
        self.temporal_reasoning = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_flags_off() {
        let config = ReasoningConfig::new(ReasoningModel::Gpt4o, 0.1, 3, false, true);
        assert_eq!(config.model, ReasoningModel::Gpt4o);
        assert_eq!(config.temperature, 0.1);
        assert_eq!(config.max_reasoning_steps, 3);
        assert!(!config.hypothesis_generation);
        assert!(config.evidence_correlation);
        assert!(!config.multi_perspective_analysis);
        assert!(!config.temporal_reasoning);
    }

    #[test]
    fn test_builder_flags() {
        let config = ReasoningConfig::new(ReasoningModel::O1Preview, 0.1, 10, true, true)
            .with_multi_perspective_analysis()
            .with_temporal_reasoning();

        assert!(config.multi_perspective_analysis);
        assert!(config.temporal_reasoning);
    }

    #[test]
    fn test_temperature_stays_in_unit_interval() {
        for tier_temp in [0.05, 0.1] {
            let config =
                ReasoningConfig::new(ReasoningModel::O1Pro, tier_temp, 25, true, true);
            assert!((0.0..=1.0).contains(&config.temperature));
        }
    }
}
