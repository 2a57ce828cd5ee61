//! Due diligence checklists.
//!
//! Four fixed indicator checklists, one per due-diligence category. The
//! indicator names are the keys an evidence-gathering pass reports
//! against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Due diligence categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueDiligenceCategory {
    FinancialStability,
    LegalCompliance,
    OperationalCapacity,
    ReputationAnalysis,
}

impl DueDiligenceCategory {
    /// All categories, in catalog order
    pub fn all() -> [DueDiligenceCategory; 4] {
        [
            DueDiligenceCategory::FinancialStability,
            DueDiligenceCategory::LegalCompliance,
            DueDiligenceCategory::OperationalCapacity,
            DueDiligenceCategory::ReputationAnalysis,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DueDiligenceCategory::FinancialStability => "financial_stability",
            DueDiligenceCategory::LegalCompliance => "legal_compliance",
            DueDiligenceCategory::OperationalCapacity => "operational_capacity",
            DueDiligenceCategory::ReputationAnalysis => "reputation_analysis",
        }
    }

    /// Indicator names to check for this category, in catalog order
    pub fn checks(&self) -> &'static [&'static str] {
        match self {
            DueDiligenceCategory::FinancialStability => &[
                "registered_capital",
                "annual_revenue",
                "debt_ratios",
                "payment_history",
            ],
            DueDiligenceCategory::LegalCompliance => &[
                "legal_sanctions",
                "ongoing_investigations",
                "tax_compliance",
                "labor_violations",
            ],
            DueDiligenceCategory::OperationalCapacity => &[
                "previous_contracts",
                "technical_capacity",
                "human_resources",
                "infrastructure",
            ],
            DueDiligenceCategory::ReputationAnalysis => &[
                "media_coverage",
                "social_media_presence",
                "industry_recognition",
                "client_testimonials",
            ],
        }
    }
}

impl fmt::Display for DueDiligenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One category's checklist record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DueDiligenceChecklist {
    pub category: DueDiligenceCategory,
    pub checks: Vec<String>,
}

impl DueDiligenceChecklist {
    /// Build the checklist for one category
    pub fn for_category(category: DueDiligenceCategory) -> DueDiligenceChecklist {
        DueDiligenceChecklist {
            category,
            checks: category.checks().iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// The fixed due-diligence checklist table, in catalog order.
pub fn due_diligence_checklists() -> Vec<DueDiligenceChecklist> {
    DueDiligenceCategory::all()
        .into_iter()
        .map(DueDiligenceChecklist::for_category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_categories_in_order() {
        let checklists = due_diligence_checklists();
        assert_eq!(checklists.len(), 4);
        assert_eq!(
            checklists[0].category,
            DueDiligenceCategory::FinancialStability
        );
        assert_eq!(
            checklists[3].category,
            DueDiligenceCategory::ReputationAnalysis
        );
    }

    #[test]
    fn test_each_category_has_four_checks() {
        for category in DueDiligenceCategory::all() {
            assert_eq!(category.checks().len(), 4, "{category}");
        }
    }

    #[test]
    fn test_financial_checks() {
        let checks = DueDiligenceCategory::FinancialStability.checks();
        assert_eq!(checks[0], "registered_capital");
        assert!(checks.contains(&"payment_history"));
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&DueDiligenceCategory::LegalCompliance).unwrap();
        assert_eq!(json, "\"legal_compliance\"");
    }

    #[test]
    fn test_checklists_are_idempotent() {
        assert_eq!(due_diligence_checklists(), due_diligence_checklists());
    }
}
