//! User preferences.
//!
//! Preferences are read from the embedded `default.yaml`, overlaid with an
//! optional user file in the same format.

use std::path::Path;

use ncube_core::{ColorScheme, CubeParams};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

/// Error produced when loading or saving preferences.
#[derive(Error, Debug)]
pub enum PrefsError {
    /// Preferences could not be read or merged
    #[error("error loading preferences: {0}")]
    Config(#[from] config::ConfigError),
    /// Preferences file could not be written
    #[error("error writing preferences: {0}")]
    Io(#[from] std::io::Error),
    /// Preferences could not be serialized
    #[error("error serializing preferences: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// User preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Parameters for new cubes.
    pub cube: CubeParams,
    /// Color of each face.
    pub colors: ColorPreferences,
}

/// Color of each face as a `#rrggbb` string.
///
/// Strings are kept as written so that the file round-trips; invalid ones
/// only become white when the color scheme is built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ColorPreferences {
    pub up: String,
    pub down: String,
    pub front: String,
    pub back: String,
    pub left: String,
    pub right: String,
}

impl Default for ColorPreferences {
    fn default() -> Self {
        let scheme = ColorScheme::default();
        Self {
            up: scheme.up.to_string(),
            down: scheme.down.to_string(),
            front: scheme.front.to_string(),
            back: scheme.back.to_string(),
            left: scheme.left.to_string(),
            right: scheme.right.to_string(),
        }
    }
}

impl ColorPreferences {
    /// Returns the color scheme, replacing invalid colors with white.
    pub fn scheme(&self) -> ColorScheme {
        ColorScheme::from_hex([
            self.up.as_str(),
            self.down.as_str(),
            self.front.as_str(),
            self.back.as_str(),
            self.left.as_str(),
            self.right.as_str(),
        ])
    }
}

impl Preferences {
    /// Loads preferences, overlaying the user file at `path` (if any) onto the
    /// defaults. If loading fails, a warning is logged and the defaults are
    /// returned.
    pub fn load(path: Option<&Path>) -> Self {
        Self::try_load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default preferences");
            Self::default()
        })
    }

    /// Loads preferences, overlaying the user file at `path` (if any) onto the
    /// defaults.
    pub fn try_load(path: Option<&Path>) -> Result<Self, PrefsError> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        if let Some(path) = path {
            log::debug!("loading preferences from {}", path.display());
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        Ok(config.build()?.try_deserialize()?)
    }

    /// Writes preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Returns the parameters for new cubes, with invalid values replaced.
    pub fn cube_params(&self) -> CubeParams {
        self.cube.sanitized()
    }

    /// Returns the color scheme, replacing invalid colors with white.
    pub fn scheme(&self) -> ColorScheme {
        self.colors.scheme()
    }
}
