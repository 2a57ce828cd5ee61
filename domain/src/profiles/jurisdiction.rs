//! Jurisdiction-specific investigation profiles.
//!
//! Like sectors, jurisdictions are an open key space with an explicit
//! empty profile on a miss. The known jurisdictions carry the official
//! procurement data portals, applicable legal frameworks, search
//! languages, and regulatory bodies for that country.

use serde::{Deserialize, Serialize};

use crate::research::search::Language;

/// Jurisdiction-specific data sources, legal frameworks, and regulators.
///
/// `Default` is the explicit empty profile returned on a lookup miss.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JurisdictionProfile {
    /// Official open-data and procurement portals
    pub data_sources: Vec<String>,
    /// Procurement and transparency laws that apply
    pub legal_frameworks: Vec<String>,
    /// Languages to run searches in for this jurisdiction
    pub search_languages: Vec<Language>,
    /// Regulatory and oversight bodies
    pub regulatory_bodies: Vec<String>,
}

impl JurisdictionProfile {
    /// Look up the profile for a jurisdiction key.
    ///
    /// Unknown keys yield the empty profile; the lookup never fails and
    /// never mutates the catalog.
    pub fn lookup(jurisdiction: &str) -> JurisdictionProfile {
        match jurisdiction.to_lowercase().as_str() {
            "colombia" => JurisdictionProfile {
                data_sources: to_strings(&[
                    "datos.gov.co",
                    "colombiacompra.gov.co",
                    "supersociedades.gov.co",
                ]),
                legal_frameworks: to_strings(&[
                    "law_1150_2007",
                    "law_1474_2011",
                    "law_1712_2014",
                ]),
                search_languages: vec![Language::Spanish],
                regulatory_bodies: to_strings(&["CCE", "SUPERSOCIEDADES", "SIC"]),
            },
            "mexico" => JurisdictionProfile {
                data_sources: to_strings(&["datos.gob.mx", "compranet.gob.mx"]),
                legal_frameworks: to_strings(&["ley_adquisiciones", "ley_transparencia"]),
                search_languages: vec![Language::Spanish],
                regulatory_bodies: to_strings(&["SFP", "INAI"]),
            },
            "brazil" => JurisdictionProfile {
                data_sources: to_strings(&[
                    "dados.gov.br",
                    "comprasgovernamentais.gov.br",
                ]),
                legal_frameworks: to_strings(&["lei_8666", "lei_12527"]),
                search_languages: vec![Language::Portuguese],
                regulatory_bodies: to_strings(&["CGU", "TCU"]),
            },
            _ => JurisdictionProfile::default(),
        }
    }

    /// Jurisdiction keys the catalog knows
    pub fn known_jurisdictions() -> [&'static str; 3] {
        ["colombia", "mexico", "brazil"]
    }

    /// Check if this is the empty (lookup-miss) profile
    pub fn is_empty(&self) -> bool {
        self.data_sources.is_empty()
            && self.legal_frameworks.is_empty()
            && self.search_languages.is_empty()
            && self.regulatory_bodies.is_empty()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
