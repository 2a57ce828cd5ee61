//! Analysis stage configuration

use serde::{Deserialize, Serialize};

/// Configuration for the analysis types run over collected evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Map relationships between the subject and connected entities
    pub network_analysis: bool,
    /// Analyze how the subject's activity evolved over time
    pub temporal_analysis: bool,
    /// Produce a weighted risk assessment
    pub risk_assessment: bool,
    /// Match evidence against known corruption patterns
    pub pattern_detection: bool,
    /// Project likely future behavior from historical data
    pub predictive_modeling: bool,
    /// Assemble findings into a structured legal case file
    pub legal_case_construction: bool,
    /// Trace financial flows between connected entities
    pub financial_flow_analysis: bool,
}

impl AnalysisConfig {
    /// Create an analysis config with the optional deep-analysis flags off.
    pub fn new(
        network_analysis: bool,
        temporal_analysis: bool,
        risk_assessment: bool,
        pattern_detection: bool,
        predictive_modeling: bool,
    ) -> Self {
        Self {
            network_analysis,
            temporal_analysis,
            risk_assessment,
            pattern_detection,
            predictive_modeling,
            legal_case_construction: false,
            financial_flow_analysis: false,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_legal_case_construction(mut self) -> Self {
        self.legal_case_construction = true;
        self
    }

    pub fn with_financial_flow_analysis(mut self) -> Self {
        self.financial_flow_analysis = true;
        self
    }
}
