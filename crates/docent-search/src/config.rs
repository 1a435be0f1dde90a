//! Configuration for freshness assessment and search
//!
//! Both structs load from TOML and come with presets, so a deployment can
//! tighten or relax what counts as stale without touching code.

use serde::{Deserialize, Serialize};

/// Configuration for the freshness assessor
///
/// # Examples
///
/// ```
/// use docent_search::FreshnessConfig;
///
/// let config = FreshnessConfig::default();
/// assert_eq!(config.max_age_days, 365);
///
/// // Flag documents after six months
/// assert_eq!(FreshnessConfig::aggressive().max_age_days, 180);
///
/// // Only flag documents older than two years
/// assert_eq!(FreshnessConfig::lenient().max_age_days, 730);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreshnessConfig {
    /// Documents older than this many days are outdated
    /// Default: 365
    pub max_age_days: u64,

    /// Flag content with deprecation markers ("deprecated", "legacy", ...)
    /// Default: true
    #[serde(default = "default_true")]
    pub check_markers: bool,

    /// Flag content mentioning end-of-life technology versions
    /// Default: true
    #[serde(default = "default_true")]
    pub check_legacy_versions: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FreshnessConfig {
    fn default() -> Self {
        Self {
            max_age_days: 365,
            check_markers: true,
            check_legacy_versions: true,
        }
    }
}

impl FreshnessConfig {
    /// Flag anything untouched for six months
    pub fn aggressive() -> Self {
        Self {
            max_age_days: 180,
            ..Self::default()
        }
    }

    /// Age-based flagging only, after two years
    pub fn lenient() -> Self {
        Self {
            max_age_days: 730,
            check_markers: false,
            check_legacy_versions: false,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_age_days == 0 {
            return Err("max_age_days must be > 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for search and related-document expansion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Results returned when a request names no limit
    /// Default: 10
    pub default_limit: usize,

    /// Upper bound applied to any requested limit
    /// Default: 100
    pub max_limit: usize,

    /// Related documents shown per edge type
    /// Default: 3
    pub related_per_type: usize,

    /// Freshness thresholds used by `exclude_outdated`
    #[serde(default)]
    pub freshness: FreshnessConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
            related_per_type: 3,
            freshness: FreshnessConfig::default(),
        }
    }
}

impl SearchConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.default_limit == 0 {
            return Err("default_limit must be > 0".to_string());
        }
        if self.max_limit < self.default_limit {
            return Err(format!(
                "max_limit ({}) must be >= default_limit ({})",
                self.max_limit, self.default_limit
            ));
        }
        if self.related_per_type == 0 {
            return Err("related_per_type must be > 0".to_string());
        }
        self.freshness.validate()
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
