//! Corruption scheme detection patterns.
//!
//! Each [`CorruptionScheme`] carries a description, a declarative
//! threshold rule, and a risk level. Threshold rules are documentation
//! for human analysts and downstream scoring systems; they are data, not
//! executable predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::DomainError;

/// Risk level assigned to a detected pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Check if a match on this pattern should flag the investigation
    pub fn requires_escalation(&self) -> bool {
        matches!(self, RiskLevel::High)
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(DomainError::UnknownRiskLevel(s.to_string())),
        }
    }
}

/// Known corruption schemes in public contracting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptionScheme {
    /// Single contractor with unusually high contract concentration
    ContractConcentration,
    /// Contractor with abnormal growth in contract value
    RapidGrowth,
    /// Companies with minimal web presence but large contracts
    ShellCompanyIndicators,
    /// Former public officials becoming contractors
    RevolvingDoor,
    /// Related individuals controlling multiple contractors
    FamilyNetworks,
}

impl CorruptionScheme {
    /// All schemes, in catalog order
    pub fn all() -> [CorruptionScheme; 5] {
        [
            CorruptionScheme::ContractConcentration,
            CorruptionScheme::RapidGrowth,
            CorruptionScheme::ShellCompanyIndicators,
            CorruptionScheme::RevolvingDoor,
            CorruptionScheme::FamilyNetworks,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CorruptionScheme::ContractConcentration => "contract_concentration",
            CorruptionScheme::RapidGrowth => "rapid_growth",
            CorruptionScheme::ShellCompanyIndicators => "shell_company_indicators",
            CorruptionScheme::RevolvingDoor => "revolving_door",
            CorruptionScheme::FamilyNetworks => "family_networks",
        }
    }

    /// Get a human-readable description of this scheme
    pub fn description(&self) -> &'static str {
        match self {
            CorruptionScheme::ContractConcentration => {
                "Single contractor with unusually high contract concentration"
            }
            CorruptionScheme::RapidGrowth => {
                "Contractor with abnormal growth in contract value"
            }
            CorruptionScheme::ShellCompanyIndicators => {
                "Companies with minimal web presence but large contracts"
            }
            CorruptionScheme::RevolvingDoor => {
                "Former public officials becoming contractors"
            }
            CorruptionScheme::FamilyNetworks => {
                "Related individuals controlling multiple contractors"
            }
        }
    }

    /// Declarative detection threshold, stated for human review
    pub fn threshold(&self) -> &'static str {
        match self {
            CorruptionScheme::ContractConcentration => "contracts > 60% of entity total",
            CorruptionScheme::RapidGrowth => "year_over_year_growth > 500%",
            CorruptionScheme::ShellCompanyIndicators => {
                "contract_value > $1M AND web_mentions < 10"
            }
            CorruptionScheme::RevolvingDoor => "employment_gap < 2_years",
            CorruptionScheme::FamilyNetworks => "shared_surnames AND shared_addresses",
        }
    }

    /// Risk level a match on this scheme carries
    pub fn risk_level(&self) -> RiskLevel {
        match self {
            CorruptionScheme::ContractConcentration => RiskLevel::High,
            CorruptionScheme::RapidGrowth => RiskLevel::Medium,
            CorruptionScheme::ShellCompanyIndicators => RiskLevel::High,
            CorruptionScheme::RevolvingDoor => RiskLevel::Medium,
            CorruptionScheme::FamilyNetworks => RiskLevel::High,
        }
    }
}

impl fmt::Display for CorruptionScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A corruption detection pattern record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorruptionPattern {
    pub scheme: CorruptionScheme,
    pub description: String,
    pub threshold: String,
    pub risk_level: RiskLevel,
}

impl CorruptionPattern {
    /// Build the record for one scheme
    pub fn for_scheme(scheme: CorruptionScheme) -> CorruptionPattern {
        CorruptionPattern {
            scheme,
            description: scheme.description().to_string(),
            threshold: scheme.threshold().to_string(),
            risk_level: scheme.risk_level(),
        }
    }
}

/// The fixed corruption-detection pattern table, in catalog order.
pub fn corruption_patterns() -> Vec<CorruptionPattern> {
    CorruptionScheme::all()
        .into_iter()
        .map(CorruptionPattern::for_scheme)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_patterns_in_order() {
        let patterns = corruption_patterns();
        assert_eq!(patterns.len(), 5);
        assert_eq!(patterns[0].scheme, CorruptionScheme::ContractConcentration);
        assert_eq!(patterns[4].scheme, CorruptionScheme::FamilyNetworks);
    }

    #[test]
    fn test_risk_levels() {
        assert_eq!(
            CorruptionScheme::ContractConcentration.risk_level(),
            RiskLevel::High
        );
        assert_eq!(CorruptionScheme::RapidGrowth.risk_level(), RiskLevel::Medium);
        assert_eq!(
            CorruptionScheme::ShellCompanyIndicators.risk_level(),
            RiskLevel::High
        );
        assert_eq!(CorruptionScheme::RevolvingDoor.risk_level(), RiskLevel::Medium);
        assert_eq!(CorruptionScheme::FamilyNetworks.risk_level(), RiskLevel::High);
    }

    #[test]
    fn test_thresholds_are_declarative_text() {
        assert_eq!(
            CorruptionScheme::ContractConcentration.threshold(),
            "contracts > 60% of entity total"
        );
        assert_eq!(
            CorruptionScheme::RapidGrowth.threshold(),
            "year_over_year_growth > 500%"
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::Low < RiskLevel::Medium);
        assert!(RiskLevel::Medium < RiskLevel::High);
    }

    #[test]
    fn test_risk_level_escalation() {
        assert!(RiskLevel::High.requires_escalation());
        assert!(!RiskLevel::Medium.requires_escalation());
        assert!(!RiskLevel::Low.requires_escalation());
    }

    #[test]
    fn test_risk_level_from_str() {
        assert_eq!("high".parse::<RiskLevel>().ok(), Some(RiskLevel::High));
        assert_eq!("Medium".parse::<RiskLevel>().ok(), Some(RiskLevel::Medium));
        assert!("critical".parse::<RiskLevel>().is_err());
    }

    #[test]
    fn test_scheme_serde_snake_case() {
        let json = serde_json::to_string(&CorruptionScheme::RevolvingDoor).unwrap();
        assert_eq!(json, "\"revolving_door\"");
    }

    #[test]
    fn test_patterns_are_idempotent() {
        assert_eq!(corruption_patterns(), corruption_patterns());
    }
}
