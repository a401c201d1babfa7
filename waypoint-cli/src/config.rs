//! Waypoint configuration loading from `.waypointrc.toml`.
//!
//! Configuration is optional. Every section falls back to defaults, and
//! command-line flags override whatever the file says.
//!
//! # Example Configuration
//!
//! ```toml
//! [data]
//! paths = "data/campus_paths.dat"
//! buildings = "data/campus_buildings.dat"
//!
//! [walking]
//! speed_fps = 4.6
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_FILE, DEFAULT_BUILDINGS_FILE, DEFAULT_PATHS_FILE, DEFAULT_WALKING_SPEED_FPS,
};

/// Root configuration structure loaded from `.waypointrc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct WaypointConfig {
    /// Campus data file locations.
    #[serde(default)]
    pub data: DataSection,

    /// Walking model used for time estimates.
    #[serde(default)]
    pub walking: WalkingConfig,

    /// Output formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Locations of the campus data files.
///
/// Relative paths are resolved against the working directory.
#[derive(Debug, Deserialize, Default)]
pub struct DataSection {
    #[serde(default)]
    pub paths: Option<PathBuf>,

    #[serde(default)]
    pub buildings: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct WalkingConfig {
    /// Walking speed in feet per second.
    #[serde(default = "default_speed_fps")]
    pub speed_fps: f64,
}

fn default_speed_fps() -> f64 {
    DEFAULT_WALKING_SPEED_FPS
}

impl Default for WalkingConfig {
    fn default() -> Self {
        Self {
            speed_fps: DEFAULT_WALKING_SPEED_FPS,
        }
    }
}

/// Output formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Default output format: `table`, `json` or `csv`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output. Unset means auto-detect.
    #[serde(default)]
    pub color: Option<bool>,
}

/// Resolved pair of data files to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub paths: PathBuf,
    pub buildings: PathBuf,
}

impl WaypointConfig {
    /// Load configuration from `.waypointrc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => {
                        tracing::debug!("Loaded {}", config_path.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Data files to load: flag if given, then config, then the default.
    pub fn data_files(&self, paths: Option<PathBuf>, buildings: Option<PathBuf>) -> DataFiles {
        DataFiles {
            paths: paths
                .or_else(|| self.data.paths.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PATHS_FILE)),
            buildings: buildings
                .or_else(|| self.data.buildings.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILDINGS_FILE)),
        }
    }

    /// Walking speed in feet per second.
    ///
    /// Non-positive or non-finite values fall back to the default.
    pub fn walking_speed(&self) -> f64 {
        let speed = self.walking.speed_fps;
        if speed.is_finite() && speed > 0.0 {
            speed
        } else {
            tracing::warn!(
                "Ignoring walking speed {} (must be positive), using {}",
                speed,
                DEFAULT_WALKING_SPEED_FPS
            );
            DEFAULT_WALKING_SPEED_FPS
        }
    }

    /// Get the default output format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}
