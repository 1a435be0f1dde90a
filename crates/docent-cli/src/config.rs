//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use docent_store::DocentConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
///
/// Stored at `~/.docent/config.toml`:
///
/// ```toml
/// active_profile = "handbook"
///
/// [profiles.handbook]
/// docs_root = "/srv/handbook/docs"
///
/// [settings]
/// color = true
/// format = "table"
///
/// [engine.search]
/// default_limit = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name
    #[serde(default = "default_profile")]
    pub active_profile: String,

    /// Available profiles
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Graph, search and loader settings shared by every profile
    ///
    /// The `docs_root` here is ignored; each profile names its own.
    #[serde(default)]
    pub engine: DocentConfig,
}

/// A named docs tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Root of the markdown tree
    pub docs_root: PathBuf,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".docent").join("config.toml"))
    }

    /// Load configuration from `path`, or the default if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            config.engine.validate().map_err(CliError::Config)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the active profile.
    pub fn get_active_profile(&self) -> Result<&Profile> {
        self.profiles
            .get(&self.active_profile)
            .ok_or_else(|| CliError::Config(format!("Profile '{}' not found", self.active_profile)))
    }

    /// Add or update a profile.
    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// Switch to a different profile.
    pub fn switch_profile(&mut self, name: String) -> Result<()> {
        if !self.profiles.contains_key(&name) {
            return Err(CliError::Config(format!("Profile '{}' does not exist", name)));
        }
        self.active_profile = name;
        Ok(())
    }

    /// Engine configuration for the active profile
    ///
    /// `docs_root` overrides the profile's root when given.
    pub fn docent_config(&self, docs_root: Option<&Path>) -> Result<DocentConfig> {
        let root = match docs_root {
            Some(root) => root.to_path_buf(),
            None => self.get_active_profile()?.docs_root.clone(),
        };
        Ok(DocentConfig {
            docs_root: root,
            ..self.engine.clone()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(
            "default".to_string(),
            Profile {
                docs_root: PathBuf::from("./docs"),
                description: None,
            },
        );

        Self {
            active_profile: "default".to_string(),
            profiles,
            settings: Settings::default(),
            engine: DocentConfig::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_profile() -> String {
    "default".to_string()
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.active_profile, "default");
        assert!(config.profiles.contains_key("default"));
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();

        let profile = Profile {
            docs_root: PathBuf::from("/srv/handbook"),
            description: Some("Team handbook".to_string()),
        };

        config.set_profile("handbook".to_string(), profile);
        assert!(config.profiles.contains_key("handbook"));

        config.switch_profile("handbook".to_string()).unwrap();
        assert_eq!(config.active_profile, "handbook");
        assert_eq!(
            config.docent_config(None).unwrap().docs_root,
            PathBuf::from("/srv/handbook")
        );
    }

    #[test]
    fn test_switch_to_nonexistent_profile() {
        let mut config = Config::default();
        let result = config.switch_profile("nonexistent".to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_docs_root_override_and_engine_settings() {
        let mut config = Config::default();
        config.engine.search.default_limit = 3;

        let docent = config.docent_config(Some(Path::new("/tmp/other"))).unwrap();
        assert_eq!(docent.docs_root, PathBuf::from("/tmp/other"));
        assert_eq!(docent.search.default_limit, 3);
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap().active_profile, "default");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.settings.format, OutputFormat::Json);
        assert_eq!(loaded.profiles, config.profiles);
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "active_profile = \"handbook\"\n\n[profiles.handbook]\ndocs_root = \"handbook\"\n\n[engine.search]\ndefault_limit = 5\nmax_limit = 50\nrelated_per_type = 2\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.get_active_profile().unwrap().docs_root, PathBuf::from("handbook"));
        assert!(config.settings.color);
        assert_eq!(config.engine.search.max_limit, 50);
    }

    #[test]
    fn test_invalid_engine_settings_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[engine.search]\ndefault_limit = 0\nmax_limit = 50\nrelated_per_type = 2\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Config(_))));
    }
}
