//! Shared constants for the Waypoint CLI.

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".waypointrc.toml";

/// Paths file used when neither the CLI nor the config names one.
pub const DEFAULT_PATHS_FILE: &str = "data/campus_paths.dat";

/// Buildings file used when neither the CLI nor the config names one.
pub const DEFAULT_BUILDINGS_FILE: &str = "data/campus_buildings.dat";

/// Average walking speed in feet per second.
pub const DEFAULT_WALKING_SPEED_FPS: f64 = 4.6;
