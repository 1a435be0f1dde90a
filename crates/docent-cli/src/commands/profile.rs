//! Profile command implementation.

use crate::cli::{ProfileAction, ProfileArgs};
use crate::config::{Config, Profile};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Execute the profile command, saving any change to `config_path`.
pub fn execute_profile(
    args: ProfileArgs,
    config: &mut Config,
    config_path: &Path,
    formatter: &Formatter,
) -> Result<String> {
    match args.action {
        ProfileAction::List => Ok(list_profiles(config, formatter)),
        ProfileAction::Show => show_active_profile(config, formatter),
        ProfileAction::Switch { name } => switch_profile(config, config_path, name, formatter),
        ProfileAction::Set {
            name,
            root,
            description,
        } => set_profile(config, config_path, name, root, description, formatter),
        ProfileAction::Delete { name } => delete_profile(config, config_path, name, formatter),
    }
}

/// List all profiles.
fn list_profiles(config: &Config, formatter: &Formatter) -> String {
    if config.profiles.is_empty() {
        return formatter.info("No profiles configured");
    }

    let mut lines = vec!["Available profiles:".to_string()];
    for (name, profile) in &config.profiles {
        if name == &config.active_profile {
            lines.push(format!("* {}", formatter.success(name)));
        } else {
            lines.push(format!("  {}", name));
        }
        lines.push(format!("    Docs root: {}", profile.docs_root.display()));
        if let Some(description) = &profile.description {
            lines.push(format!("    Description: {}", description));
        }
    }
    lines.join("\n")
}

/// Show the active profile.
fn show_active_profile(config: &Config, formatter: &Formatter) -> Result<String> {
    let profile = config.get_active_profile()?;

    let mut lines = vec![
        format!("Active profile: {}", formatter.success(&config.active_profile)),
        format!("  Docs root: {}", profile.docs_root.display()),
    ];
    if let Some(description) = &profile.description {
        lines.push(format!("  Description: {}", description));
    }
    Ok(lines.join("\n"))
}

/// Switch to a different profile.
fn switch_profile(config: &mut Config, config_path: &Path, name: String, formatter: &Formatter) -> Result<String> {
    config.switch_profile(name.clone())?;
    config.save_to(config_path)?;
    Ok(formatter.success(&format!("Switched to profile '{}'", name)))
}

/// Create or update a profile.
fn set_profile(
    config: &mut Config,
    config_path: &Path,
    name: String,
    docs_root: PathBuf,
    description: Option<String>,
    formatter: &Formatter,
) -> Result<String> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput("Profile name must not be empty".to_string()));
    }

    let action = if config.profiles.contains_key(&name) {
        "Updated"
    } else {
        "Created"
    };

    config.set_profile(
        name.clone(),
        Profile {
            docs_root,
            description,
        },
    );
    config.save_to(config_path)?;

    Ok(formatter.success(&format!("{} profile '{}'", action, name)))
}

/// Delete a profile.
fn delete_profile(config: &mut Config, config_path: &Path, name: String, formatter: &Formatter) -> Result<String> {
    if name == config.active_profile {
        return Err(CliError::NotPermitted("Cannot delete the active profile".to_string()));
    }

    if config.profiles.remove(&name).is_some() {
        config.save_to(config_path)?;
        Ok(formatter.success(&format!("Deleted profile '{}'", name)))
    } else {
        Ok(formatter.warning(&format!("Profile '{}' does not exist", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_switch_profile() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let message = set_profile(
            &mut config,
            &path,
            "handbook".to_string(),
            PathBuf::from("/srv/handbook"),
            None,
            &formatter,
        )
        .unwrap();
        assert_eq!(message, "✓ Created profile 'handbook'");
        assert!(config.profiles.contains_key("handbook"));

        switch_profile(&mut config, &path, "handbook".to_string(), &formatter).unwrap();
        assert_eq!(config.active_profile, "handbook");

        let saved = Config::load_from(&path).unwrap();
        assert_eq!(saved.active_profile, "handbook");
    }

    #[test]
    fn test_delete_active_profile() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        let formatter = Formatter::new(OutputFormat::Table, false);

        let result = delete_profile(
            &mut config,
            &dir.path().join("config.toml"),
            "default".to_string(),
            &formatter,
        );
        assert!(matches!(result, Err(CliError::NotPermitted(_))));
    }

    #[test]
    fn test_list_marks_active() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = list_profiles(&Config::default(), &formatter);
        assert!(output.contains("* ✓ default"));
        assert!(output.contains("Docs root: ./docs"));
    }
}
