//! Configuration for the graph builder

use serde::{Deserialize, Serialize};

/// How the fuzzy resolver handles a reference matching several documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Drop the reference
    Reject,
    /// Take the first candidate in corpus order
    FirstInCorpusOrder,
}

impl Default for AmbiguityPolicy {
    fn default() -> Self {
        AmbiguityPolicy::Reject
    }
}

/// Configuration for the graph builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum setup guides attached as inferred prerequisites
    pub max_inferred_prerequisites: usize,

    /// Maximum guides attached as inferred follow-ups
    pub max_inferred_follow_ups: usize,

    /// Fuzzy resolution ambiguity handling
    #[serde(default)]
    pub ambiguity_policy: AmbiguityPolicy,

    /// Run the inference rules at all
    #[serde(default = "default_infer")]
    pub infer_relationships: bool,
}

fn default_infer() -> bool {
    true
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_inferred_prerequisites: 2,
            max_inferred_follow_ups: 3,
            ambiguity_policy: AmbiguityPolicy::Reject,
            infer_relationships: true,
        }
    }
}

impl GraphConfig {
    /// Explicit edges only, strict resolution
    pub fn explicit_only() -> Self {
        Self {
            infer_relationships: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.infer_relationships
            && self.max_inferred_prerequisites == 0
            && self.max_inferred_follow_ups == 0
        {
            return Err(
                "inference is enabled but both inferred edge caps are 0; set infer_relationships = false instead"
                    .to_string(),
            );
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
