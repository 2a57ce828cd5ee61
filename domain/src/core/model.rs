//! Reasoning model value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available reasoning models (Value Object)
///
/// This is a domain concept representing the model that drives the
/// reasoning stage of an investigation. The deliberate o-series models
/// are reserved for the deeper tiers; the standard tier runs on a fast
/// conversational model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReasoningModel {
    Gpt4o,
    O1Preview,
    O1Pro,
    O3Mini,
    O3,
    // Custom
    Custom(String),
}

impl ReasoningModel {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            ReasoningModel::Gpt4o => "gpt-4o",
            ReasoningModel::O1Preview => "o1-preview",
            ReasoningModel::O1Pro => "o1-pro",
            ReasoningModel::O3Mini => "o3-mini",
            ReasoningModel::O3 => "o3",
            ReasoningModel::Custom(s) => s,
        }
    }

    /// Check if this is a deliberate (multi-step) reasoning model
    pub fn is_deliberate(&self) -> bool {
        matches!(
            self,
            ReasoningModel::O1Preview
                | ReasoningModel::O1Pro
                | ReasoningModel::O3Mini
                | ReasoningModel::O3
        )
    }
}

impl Default for ReasoningModel {
    /// Returns the default model (gpt-4o, the standard-tier model)
    fn default() -> Self {
        ReasoningModel::Gpt4o
    }
}

impl std::fmt::Display for ReasoningModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReasoningModel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o" => ReasoningModel::Gpt4o,
            "o1-preview" => ReasoningModel::O1Preview,
            "o1-pro" => ReasoningModel::O1Pro,
            "o3-mini" => ReasoningModel::O3Mini,
            "o3" => ReasoningModel::O3,
            other => ReasoningModel::Custom(other.to_string()),
        })
    }
}

impl Serialize for ReasoningModel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ReasoningModel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
