//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use vigia_application::InvestigationConfig;
use vigia_domain::{OutputFormat, ResearchTier};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("unknown default_tier '{0}' (expected standard, deep, or ultra)")]
    UnknownTier(String),

    #[error("{0} cannot be empty")]
    EmptyLookupKey(&'static str),
}

/// Raw research configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResearchConfig {
    /// Default tier when none is given on the command line
    pub default_tier: String,
    /// Default sector profile key
    pub sector: Option<String>,
    /// Default jurisdiction profile key
    pub jurisdiction: Option<String>,
}

impl Default for FileResearchConfig {
    fn default() -> Self {
        Self {
            default_tier: "standard".to_string(),
            sector: None,
            jurisdiction: None,
        }
    }
}

impl FileResearchConfig {
    /// Parse default_tier into a ResearchTier, falling back to the
    /// default tier on an unknown string. `validate()` reports the
    /// unknown string separately.
    pub fn parse_tier(&self) -> ResearchTier {
        self.default_tier.parse().unwrap_or_default()
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses the presentation value object)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Research settings
    pub research: FileResearchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.research.default_tier.parse::<ResearchTier>().is_err() {
            return Err(ConfigValidationError::UnknownTier(
                self.research.default_tier.clone(),
            ));
        }

        if let Some(sector) = &self.research.sector {
            if sector.trim().is_empty() {
                return Err(ConfigValidationError::EmptyLookupKey("sector"));
            }
        }

        if let Some(jurisdiction) = &self.research.jurisdiction {
            if jurisdiction.trim().is_empty() {
                return Err(ConfigValidationError::EmptyLookupKey("jurisdiction"));
            }
        }

        Ok(())
    }

    /// Build the [`InvestigationConfig`] these file settings describe.
    ///
    /// Command-line selections are layered on top by the caller; this
    /// only carries the file's defaults.
    pub fn to_investigation_config(&self) -> InvestigationConfig {
        let mut config = InvestigationConfig::new(self.research.parse_tier());
        if let Some(sector) = &self.research.sector {
            config = config.with_sector(sector.clone());
        }
        if let Some(jurisdiction) = &self.research.jurisdiction {
            config = config.with_jurisdiction(jurisdiction.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[research]
default_tier = "deep"
sector = "infrastructure"
jurisdiction = "colombia"

[output]
format = "json"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.research.default_tier, "deep");
        assert_eq!(config.research.parse_tier(), ResearchTier::Deep);
        assert_eq!(config.research.sector, Some("infrastructure".to_string()));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[research]
jurisdiction = "mexico"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.research.parse_tier(), ResearchTier::Standard);
        assert_eq!(config.research.jurisdiction, Some("mexico".to_string()));
        // Defaults should apply
        assert!(config.output.color);
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.research.default_tier, "standard");
        assert!(config.research.sector.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_unknown_tier() {
        let toml_str = r#"
[research]
default_tier = "turbo"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnknownTier(_))
        ));
        // Lenient parse still yields the default tier
        assert_eq!(config.research.parse_tier(), ResearchTier::Standard);
    }

    #[test]
    fn test_validate_empty_sector() {
        let toml_str = r#"
[research]
sector = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyLookupKey("sector"))
        ));
    }

    #[test]
    fn test_to_investigation_config() {
        let toml_str = r#"
[research]
default_tier = "deep"
sector = "healthcare"
jurisdiction = "colombia"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let investigation = config.to_investigation_config();
        assert_eq!(investigation.tier(), ResearchTier::Deep);
        assert_eq!(investigation.sector(), Some("healthcare"));
        assert_eq!(investigation.jurisdiction(), Some("colombia"));
    }

    #[test]
    fn test_tier_aliases_accepted() {
        let toml_str = r#"
[research]
default_tier = "u"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.research.parse_tier(), ResearchTier::Ultra);
    }
}
