//! Configuration file loading for the CLI
//!
//! This module handles finding and loading an optional TOML configuration
//! file, either from an explicit path or from `armature.toml` in the
//! current directory. Everything in it is optional; missing sections fall
//! back to defaults.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::Deserialize;

use armature::{ArmatureError, Color};

/// The local configuration file probed when no explicit path is given.
const LOCAL_CONFIG: &str = "armature.toml";

/// Top-level configuration: output and style sections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output location settings.
    #[serde(default)]
    output: OutputConfig,

    /// Style override settings.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Where rendered files land.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory the diagrams' fixed output paths are resolved against.
    #[serde(default)]
    directory: Option<PathBuf>,
}

impl OutputConfig {
    /// Returns the configured output directory, if any.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }
}

/// Visual overrides applied to every regenerated diagram.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] override for all diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, ArmatureError> {
        self.background_color
            .as_deref()
            .map(|value| Color::new(value).map_err(ArmatureError::Color))
            .transpose()
    }
}

/// Find and load configuration.
///
/// Search order:
/// 1. Explicit path if provided (missing file is an error)
/// 2. `armature.toml` in the current directory
/// 3. Defaults if neither exists
pub fn load_config(explicit_path: Option<&str>) -> Result<AppConfig, ArmatureError> {
    if let Some(path) = explicit_path {
        let path = Path::new(path);
        if !path.exists() {
            return Err(ArmatureError::Config(format!(
                "missing configuration file: {}",
                path.display()
            )));
        }
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG);
    if local_config.exists() {
        info!(path = LOCAL_CONFIG; "Loading configuration from local path");
        return load_config_file(local_config);
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

fn load_config_file(path: &Path) -> Result<AppConfig, ArmatureError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|err| ArmatureError::Config(format!("failed to parse TOML configuration: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = AppConfig::default();
        assert!(config.output().directory().is_none());
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
            [output]
            directory = "site"

            [style]
            background_color = "#0f172a"
            "##,
        )
        .unwrap();

        assert_eq!(config.output().directory(), Some(Path::new("site")));
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color_is_an_error() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "not-a-color"
            "#,
        )
        .unwrap();

        assert!(matches!(
            config.style().background_color(),
            Err(ArmatureError::Color(_))
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let result = load_config(Some("/definitely/not/here/armature.toml"));
        assert!(matches!(result, Err(ArmatureError::Config(_))));
    }
}
