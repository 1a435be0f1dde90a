//! Loader and engine configuration

use docent_graph::GraphConfig;
use docent_search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the docs tree is read and documents are derived
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// File extensions treated as documents (without the dot)
    /// Default: ["md"]
    pub extensions: Vec<String>,

    /// Skip files and directories whose name starts with `.`
    /// Default: true
    #[serde(default = "default_true")]
    pub skip_hidden: bool,

    /// Reading speed used for read-time estimates
    /// Default: 200
    pub words_per_minute: u32,

    /// Longest derived summary, in characters
    /// Default: 200
    pub summary_chars: usize,
}

fn default_true() -> bool {
    true
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            skip_hidden: true,
            words_per_minute: 200,
            summary_chars: 200,
        }
    }
}

impl LoaderConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("at least one file extension is required".to_string());
        }
        if self.words_per_minute == 0 {
            return Err("words_per_minute must be > 0".to_string());
        }
        if self.summary_chars == 0 {
            return Err("summary_chars must be > 0".to_string());
        }
        Ok(())
    }

    /// Whether a file extension is a document extension
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

/// Complete engine configuration
///
/// # Examples
///
/// ```
/// use docent_store::DocentConfig;
///
/// let config = DocentConfig::from_toml(r#"
///     docs_root = "handbook"
///
///     [graph]
///     max_inferred_prerequisites = 1
///     max_inferred_follow_ups = 3
/// "#).unwrap();
///
/// assert_eq!(config.docs_root.to_str(), Some("handbook"));
/// assert_eq!(config.graph.max_inferred_prerequisites, 1);
/// assert_eq!(config.search.default_limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocentConfig {
    /// Root of the markdown tree
    /// Default: ./docs
    #[serde(default = "default_docs_root")]
    pub docs_root: PathBuf,

    /// Graph builder settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Search and freshness settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Loader settings
    #[serde(default)]
    pub loader: LoaderConfig,
}

fn default_docs_root() -> PathBuf {
    PathBuf::from("./docs")
}

impl Default for DocentConfig {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            graph: GraphConfig::default(),
            search: SearchConfig::default(),
            loader: LoaderConfig::default(),
        }
    }
}

impl DocentConfig {
    /// Default configuration for a docs root
    pub fn for_root(docs_root: impl Into<PathBuf>) -> Self {
        Self {
            docs_root: docs_root.into(),
            ..Self::default()
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        self.graph.validate().map_err(|e| format!("[graph] {}", e))?;
        self.search.validate().map_err(|e| format!("[search] {}", e))?;
        self.loader.validate().map_err(|e| format!("[loader] {}", e))?;
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

    /// Load and validate configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DocentConfig::default();
        assert_eq!(config.docs_root, PathBuf::from("./docs"));
        assert_eq!(config.loader.extensions, vec!["md"]);
        assert_eq!(config.loader.words_per_minute, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(DocentConfig::from_toml("").unwrap(), DocentConfig::default());
    }

    #[test]
    fn test_validation_names_section() {
        let mut config = DocentConfig::default();
        config.loader.words_per_minute = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("[loader]"));
    }

    #[test]
    fn test_accepts_extension() {
        let config = LoaderConfig {
            extensions: vec!["md".to_string(), ".markdown".to_string()],
            ..LoaderConfig::default()
        };
        assert!(config.accepts_extension("MD"));
        assert!(config.accepts_extension("markdown"));
        assert!(!config.accepts_extension("txt"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DocentConfig::for_root("/srv/docs");
        let parsed = DocentConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, parsed);
    }
}
