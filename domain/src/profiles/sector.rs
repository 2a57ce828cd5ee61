//! Sector-specific investigation profiles.
//!
//! Sectors are an open key space: the catalog knows a handful, and an
//! unknown key yields the empty profile rather than an error. Keys are
//! matched case-insensitively.

use serde::{Deserialize, Serialize};

/// A multiplier applied to one risk indicator for a sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMultiplier {
    /// Indicator name the multiplier applies to
    pub indicator: String,
    /// Multiplier applied to the indicator's contribution
    pub factor: f64,
}

impl RiskMultiplier {
    pub fn new(indicator: impl Into<String>, factor: f64) -> Self {
        Self {
            indicator: indicator.into(),
            factor,
        }
    }
}

/// Sector-specific focus areas, risk multipliers, and sources.
///
/// `Default` is the explicit empty profile returned on a lookup miss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorProfile {
    /// Investigation focus areas for this sector
    pub focus_areas: Vec<String>,
    /// Indicator multipliers layered on the base risk weights
    pub risk_multipliers: Vec<RiskMultiplier>,
    /// Sector-specific source lists to search
    pub specialized_sources: Vec<String>,
}

impl SectorProfile {
    /// Look up the profile for a sector key.
    ///
    /// Unknown keys yield the empty profile; the lookup never fails and
    /// never mutates the catalog.
    pub fn lookup(sector: &str) -> SectorProfile {
        match sector.to_lowercase().as_str() {
            "infrastructure" => SectorProfile {
                focus_areas: to_strings(&[
                    "technical_capacity",
                    "environmental_compliance",
                    "safety_records",
                ]),
                risk_multipliers: vec![
                    RiskMultiplier::new("delivery_delays", 2.0),
                    RiskMultiplier::new("quality_issues", 1.5),
                ],
                specialized_sources: to_strings(&[
                    "engineering_journals",
                    "construction_databases",
                ]),
            },
            "healthcare" => SectorProfile {
                focus_areas: to_strings(&[
                    "medical_licenses",
                    "regulatory_compliance",
                    "patient_safety",
                ]),
                risk_multipliers: vec![
                    RiskMultiplier::new("regulatory_violations", 3.0),
                    RiskMultiplier::new("safety_incidents", 2.5),
                ],
                specialized_sources: to_strings(&["medical_databases", "health_authorities"]),
            },
            "technology" => SectorProfile {
                focus_areas: to_strings(&[
                    "cybersecurity",
                    "data_privacy",
                    "intellectual_property",
                ]),
                risk_multipliers: vec![
                    RiskMultiplier::new("security_breaches", 2.0),
                    RiskMultiplier::new("ip_violations", 1.8),
                ],
                specialized_sources: to_strings(&["tech_journals", "patent_databases"]),
            },
            "education" => SectorProfile {
                focus_areas: to_strings(&[
                    "accreditation",
                    "student_outcomes",
                    "faculty_qualifications",
                ]),
                risk_multipliers: vec![
                    RiskMultiplier::new("accreditation_loss", 3.0),
                    RiskMultiplier::new("poor_outcomes", 1.5),
                ],
                specialized_sources: to_strings(&["education_databases", "academic_journals"]),
            },
            _ => SectorProfile::default(),
        }
    }

    /// Sector keys the catalog knows
    pub fn known_sectors() -> [&'static str; 4] {
        ["infrastructure", "healthcare", "technology", "education"]
    }

    /// Check if this is the empty (lookup-miss) profile
    pub fn is_empty(&self) -> bool {
        self.focus_areas.is_empty()
            && self.risk_multipliers.is_empty()
            && self.specialized_sources.is_empty()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infrastructure_profile() {
        let profile = SectorProfile::lookup("infrastructure");
        assert!(!profile.is_empty());
        assert_eq!(profile.focus_areas.len(), 3);
        assert_eq!(profile.risk_multipliers[0].indicator, "delivery_delays");
        assert_eq!(profile.risk_multipliers[0].factor, 2.0);
        assert!(
            profile
                .specialized_sources
                .contains(&"construction_databases".to_string())
        );
    }

    #[test]
    fn test_healthcare_multipliers() {
        let profile = SectorProfile::lookup("healthcare");
        assert_eq!(profile.risk_multipliers[0].indicator, "regulatory_violations");
        assert_eq!(profile.risk_multipliers[0].factor, 3.0);
    }

    #[test]
    fn test_unknown_sector_yields_empty_profile() {
        let profile = SectorProfile::lookup("nonexistent");
        assert!(profile.is_empty());
        assert_eq!(profile, SectorProfile::default());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            SectorProfile::lookup("Technology"),
            SectorProfile::lookup("technology")
        );
    }

    #[test]
    fn test_lookup_is_idempotent() {
        // A miss does not change what later lookups see
        let _ = SectorProfile::lookup("nonexistent");
        assert_eq!(
            SectorProfile::lookup("education"),
            SectorProfile::lookup("education")
        );
        assert!(SectorProfile::lookup("nonexistent").is_empty());
    }

    #[test]
    fn test_known_sectors_resolve() {
        for key in SectorProfile::known_sectors() {
            assert!(!SectorProfile::lookup(key).is_empty(), "{key}");
        }
    }
}
