//! Risk factor weights.
//!
//! The five risk factors partition the composite 0-100 risk score: their
//! weights sum to exactly 1.0, and score normalization downstream relies
//! on that. The partition is asserted once, when the table is first
//! built, not on every call.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Tolerance for the weight partition invariant
pub const WEIGHT_EPSILON: f64 = 1e-9;

/// The weighted risk categories contributing to the composite score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFactorKind {
    Financial,
    Operational,
    Legal,
    Reputational,
    Political,
}

impl RiskFactorKind {
    /// All factors, in catalog order
    pub fn all() -> [RiskFactorKind; 5] {
        [
            RiskFactorKind::Financial,
            RiskFactorKind::Operational,
            RiskFactorKind::Legal,
            RiskFactorKind::Reputational,
            RiskFactorKind::Political,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskFactorKind::Financial => "financial",
            RiskFactorKind::Operational => "operational",
            RiskFactorKind::Legal => "legal",
            RiskFactorKind::Reputational => "reputational",
            RiskFactorKind::Political => "political",
        }
    }

    /// Weight of this factor in the composite score
    pub fn weight(&self) -> f64 {
        match self {
            RiskFactorKind::Financial => 0.25,
            RiskFactorKind::Operational => 0.20,
            RiskFactorKind::Legal => 0.25,
            RiskFactorKind::Reputational => 0.15,
            RiskFactorKind::Political => 0.15,
        }
    }

    /// Indicator names feeding this factor, in catalog order
    pub fn indicators(&self) -> &'static [&'static str] {
        match self {
            RiskFactorKind::Financial => &[
                "debt_ratio",
                "cash_flow",
                "revenue_volatility",
                "asset_concentration",
            ],
            RiskFactorKind::Operational => &[
                "delivery_delays",
                "quality_issues",
                "capacity_utilization",
                "key_person_dependency",
            ],
            RiskFactorKind::Legal => &[
                "ongoing_litigation",
                "regulatory_violations",
                "sanction_history",
                "compliance_gaps",
            ],
            RiskFactorKind::Reputational => &[
                "negative_media",
                "corruption_allegations",
                "industry_blacklists",
                "social_media_sentiment",
            ],
            RiskFactorKind::Political => &[
                "political_connections",
                "conflict_of_interest",
                "revolving_door",
                "campaign_contributions",
            ],
        }
    }
}

impl fmt::Display for RiskFactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One weighted risk factor record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub weight: f64,
    pub indicators: Vec<String>,
}

impl RiskFactor {
    /// Build the record for one factor kind
    pub fn of(kind: RiskFactorKind) -> RiskFactor {
        RiskFactor {
            kind,
            weight: kind.weight(),
            indicators: kind.indicators().iter().map(|i| i.to_string()).collect(),
        }
    }
}

static RISK_WEIGHTS: LazyLock<Vec<RiskFactor>> = LazyLock::new(|| {
    let factors: Vec<RiskFactor> = RiskFactorKind::all().into_iter().map(RiskFactor::of).collect();
    let total: f64 = factors.iter().map(|f| f.weight).sum();
    assert!(
        (total - 1.0).abs() < WEIGHT_EPSILON,
        "risk factor weights must sum to 1.0, got {total}"
    );
    factors
});

/// The fixed risk-weight table, in catalog order.
///
/// Weights sum to 1.0 within [`WEIGHT_EPSILON`]; the invariant is checked
/// when the table is first built.
pub fn risk_weights() -> &'static [RiskFactor] {
    &RISK_WEIGHTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_partition_the_score() {
        let total: f64 = risk_weights().iter().map(|f| f.weight).sum();
        assert!((total - 1.0).abs() < WEIGHT_EPSILON);
    }

    #[test]
    fn test_five_factors_in_order() {
        let factors = risk_weights();
        assert_eq!(factors.len(), 5);
        assert_eq!(factors[0].kind, RiskFactorKind::Financial);
        assert_eq!(factors[4].kind, RiskFactorKind::Political);
    }

    #[test]
    fn test_tabulated_weights() {
        assert_eq!(RiskFactorKind::Financial.weight(), 0.25);
        assert_eq!(RiskFactorKind::Operational.weight(), 0.20);
        assert_eq!(RiskFactorKind::Legal.weight(), 0.25);
        assert_eq!(RiskFactorKind::Reputational.weight(), 0.15);
        assert_eq!(RiskFactorKind::Political.weight(), 0.15);
    }

    #[test]
    fn test_each_factor_has_four_indicators() {
        for kind in RiskFactorKind::all() {
            assert_eq!(kind.indicators().len(), 4, "{kind}");
        }
    }

    #[test]
    fn test_political_indicators_include_revolving_door() {
        assert!(
            RiskFactorKind::Political
                .indicators()
                .contains(&"revolving_door")
        );
    }

    #[test]
    fn test_repeated_calls_return_same_table() {
        assert_eq!(risk_weights(), risk_weights());
        assert!(std::ptr::eq(risk_weights(), risk_weights()));
    }

    #[test]
    fn test_serde_lowercase_kind() {
        let json = serde_json::to_string(&RiskFactorKind::Reputational).unwrap();
        assert_eq!(json, "\"reputational\"");
    }
}
