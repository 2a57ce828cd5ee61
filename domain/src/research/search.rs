//! Web search configuration value objects

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::error::DomainError;

/// Search engines an investigation may query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    /// General-purpose research search API
    Tavily,
    Google,
    Bing,
    /// Academic paper indexes
    Academic,
    /// Court records and case law databases
    Legal,
    /// Official government portals and registries
    Government,
}

impl SearchEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEngine::Tavily => "tavily",
            SearchEngine::Google => "google",
            SearchEngine::Bing => "bing",
            SearchEngine::Academic => "academic",
            SearchEngine::Legal => "legal",
            SearchEngine::Government => "government",
        }
    }
}

impl fmt::Display for SearchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SearchEngine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tavily" => Ok(SearchEngine::Tavily),
            "google" => Ok(SearchEngine::Google),
            "bing" => Ok(SearchEngine::Bing),
            "academic" => Ok(SearchEngine::Academic),
            "legal" => Ok(SearchEngine::Legal),
            "government" => Ok(SearchEngine::Government),
            _ => Err(DomainError::UnknownEngine(s.to_string())),
        }
    }
}

/// Languages a search pass can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "pt")]
    Portuguese,
}

impl Language {
    /// ISO 639-1 code for this language
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
            Language::Portuguese => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "es" | "spanish" => Ok(Language::Spanish),
            "en" | "english" => Ok(Language::English),
            "pt" | "portuguese" => Ok(Language::Portuguese),
            _ => Err(DomainError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Geographic focus for a search pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Colombia only
    #[serde(rename = "CO")]
    Colombia,
    /// Latin America, for cross-border investigations
    #[serde(rename = "LATAM")]
    Latam,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Colombia => "CO",
            Region::Latam => "LATAM",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Region {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CO" => Ok(Region::Colombia),
            "LATAM" => Ok(Region::Latam),
            _ => Err(DomainError::UnknownRegion(s.to_string())),
        }
    }
}

/// How far back a search pass looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Recent results only
    Recent,
    /// No date restriction
    Any,
    /// Full archival sweep, including historical records
    Comprehensive,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Recent => "recent",
            TimeRange::Any => "any",
            TimeRange::Comprehensive => "comprehensive",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recent" => Ok(TimeRange::Recent),
            "any" => Ok(TimeRange::Any),
            "comprehensive" => Ok(TimeRange::Comprehensive),
            _ => Err(DomainError::UnknownTimeRange(s.to_string())),
        }
    }
}

/// Configuration for the web search stage of an investigation.
///
/// Once built for a tier, a `SearchConfig` is immutable. The builder
/// methods exist for catalog construction and tests, not for runtime
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of search queries issued
    pub max_searches: u32,
    /// Engines to query, in priority order
    pub engines: Vec<SearchEngine>,
    /// Languages to search in, in priority order
    pub languages: Vec<Language>,
    /// Geographic focus for queries and source selection
    pub geographic_focus: Region,
    /// How far back to look
    pub time_range: TimeRange,
    /// Include academic paper indexes
    pub use_academic_sources: bool,
    /// Include social media presence scanning
    pub include_social_media: bool,
}

impl SearchConfig {
    /// Create a search config with the thoroughness flags off.
    pub fn new(
        max_searches: u32,
        engines: Vec<SearchEngine>,
        languages: Vec<Language>,
        geographic_focus: Region,
        time_range: TimeRange,
    ) -> Self {
        Self {
            max_searches,
            engines,
            languages,
            geographic_focus,
            time_range,
            use_academic_sources: false,
            include_social_media: false,
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_academic_sources(mut self) -> Self {
        self.use_academic_sources = true;
        self
    }

    pub fn with_social_media(mut self) -> Self {
        self.include_social_media = true;
        self
    }

    /// Check whether this config searches in the given language
    pub fn covers_language(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_from_str() {
        assert_eq!("tavily".parse::<SearchEngine>().ok(), Some(SearchEngine::Tavily));
        assert_eq!("Legal".parse::<SearchEngine>().ok(), Some(SearchEngine::Legal));
        assert!("altavista".parse::<SearchEngine>().is_err());
    }

    #[test]
    fn test_engine_serialize_lowercase() {
        let json = serde_json::to_string(&SearchEngine::Government).unwrap();
        assert_eq!(json, "\"government\"");
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::Spanish.as_str(), "es");
        assert_eq!(Language::English.as_str(), "en");
        assert_eq!(Language::Portuguese.as_str(), "pt");
        assert_eq!("pt".parse::<Language>().ok(), Some(Language::Portuguese));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_language_serde_iso_codes() {
        assert_eq!(serde_json::to_string(&Language::Spanish).unwrap(), "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }

    #[test]
    fn test_region_codes() {
        assert_eq!(Region::Colombia.as_str(), "CO");
        assert_eq!(Region::Latam.as_str(), "LATAM");
        assert_eq!("co".parse::<Region>().ok(), Some(Region::Colombia));
        assert!("EU".parse::<Region>().is_err());
    }

    #[test]
    fn test_time_range_roundtrip() {
        for range in [TimeRange::Recent, TimeRange::Any, TimeRange::Comprehensive] {
            let parsed: TimeRange = range.as_str().parse().unwrap();
            assert_eq!(range, parsed);
        }
    }

    #[test]
    fn test_new_defaults_flags_off() {
        let config = SearchConfig::new(
            5,
            vec![SearchEngine::Tavily, SearchEngine::Google],
            vec![Language::Spanish],
            Region::Colombia,
            TimeRange::Recent,
        );
        assert!(!config.use_academic_sources);
        assert!(!config.include_social_media);
        assert_eq!(config.max_searches, 5);
    }

    #[test]
    fn test_builder_flags() {
        let config = SearchConfig::new(
            50,
            vec![SearchEngine::Tavily],
            vec![Language::Spanish, Language::English],
            Region::Colombia,
            TimeRange::Any,
        )
        .with_academic_sources()
        .with_social_media();

        assert!(config.use_academic_sources);
        assert!(config.include_social_media);
    }

    #[test]
    fn test_covers_language() {
        let config = SearchConfig::new(
            5,
            vec![SearchEngine::Google],
            vec![Language::Spanish, Language::English],
            Region::Colombia,
            TimeRange::Recent,
        );
        assert!(config.covers_language(Language::Spanish));
        assert!(!config.covers_language(Language::Portuguese));
    }
}
