//! Command implementations for the Waypoint CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod buildings;
pub mod completions;
pub mod route;
pub mod shell;

use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;
use waypoint_core::{CampusMap, CampusPoint};

use crate::config::DataFiles;

/// User-facing errors raised by commands.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Unknown building: {0}")]
    UnknownBuilding(String),
}

/// Read both data files and build the campus map they describe.
pub async fn load_map(files: &DataFiles) -> Result<CampusMap> {
    let paths = read_data(&files.paths).await?;
    let buildings = read_data(&files.buildings).await?;

    let map = CampusMap::from_sources(&paths, &buildings).with_context(|| {
        format!(
            "Failed to load campus data ({}, {})",
            files.paths.display(),
            files.buildings.display()
        )
    })?;
    tracing::info!(
        points = map.graph().node_count(),
        buildings = map.buildings().count(),
        "Loaded campus map"
    );
    Ok(map)
}

async fn read_data(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to load campus data from {}", path.display()))
}

/// Look up a building by abbreviation.
///
/// Only buildings that sit on a walkable path are returned, since routes can
/// only start and end at points of the graph.
pub fn find_building<'a>(map: &'a CampusMap, abbr: &str) -> Option<&'a CampusPoint> {
    map.building(abbr)
        .filter(|building| map.graph().contains(building))
}
