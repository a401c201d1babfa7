//! Campus routing model.
//!
//! A [`CampusMap`] is a [`Graph`] of [`CampusPoint`]s labelled with walking
//! [`Distance`]s, plus an index of named buildings. It is loaded from two
//! text files (see [`parser`]) and answers shortest-route queries with
//! per-leg compass headings.

mod compass;
pub mod parser;
mod point;

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

pub use compass::Compass;
pub use parser::DataError;
pub use point::{Building, CampusPoint};

use crate::dijkstra::{self, Route};
use crate::graph::{Graph, Nodes};
use crate::weight::Distance;

/// One step of a campus route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: CampusPoint,
    pub to: CampusPoint,
    pub distance: Distance,
    pub heading: Compass,
}

/// Walkable campus: points, paths between them and named buildings.
#[derive(Debug, Clone, Default)]
pub struct CampusMap {
    graph: Graph<CampusPoint, Distance>,
    /// Buildings keyed by location, used to name path endpoints.
    locations: HashSet<CampusPoint>,
    /// Buildings keyed by abbreviation.
    by_abbr: BTreeMap<String, CampusPoint>,
}

impl CampusMap {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from the text of a paths file and a buildings file.
    pub fn from_sources(paths: &str, buildings: &str) -> parser::Result<Self> {
        let mut map = Self::new();
        map.build_graph(paths, buildings)?;
        Ok(map)
    }

    /// Read and parse both data files.
    pub fn load(paths_file: &Path, buildings_file: &Path) -> parser::Result<Self> {
        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| DataError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let map = Self::from_sources(&read(paths_file)?, &read(buildings_file)?)?;
        info!(
            points = map.graph.node_count(),
            buildings = map.by_abbr.len(),
            "Loaded campus map"
        );
        Ok(map)
    }

    /// Add buildings, then paths, into this map.
    ///
    /// Buildings are indexed first so that path endpoints at a building's
    /// coordinates carry its names. On error the map may hold the data
    /// parsed before the failing line.
    pub fn build_graph(&mut self, paths: &str, buildings: &str) -> parser::Result<()> {
        self.add_buildings(parser::parse_buildings(buildings)?);
        parser::parse_paths(paths, &mut self.graph, &self.locations)
    }

    /// Index buildings. The first building seen for a given abbreviation or
    /// location is kept.
    pub fn add_buildings<I: IntoIterator<Item = CampusPoint>>(&mut self, buildings: I) {
        for building in buildings {
            let Some(abbr) = building.abbr().map(str::to_owned) else {
                debug!(point = %building, "Skipping unnamed building");
                continue;
            };
            if !self.locations.contains(&building) {
                self.locations.insert(building.clone());
            }
            self.by_abbr.entry(abbr).or_insert(building);
        }
    }

    /// Shortest route between two points of the map.
    ///
    /// `Ok(None)` if `end` cannot be reached. Fails if either point is not on
    /// the map.
    pub fn find_path(
        &self,
        start: &CampusPoint,
        end: &CampusPoint,
    ) -> crate::Result<Option<Route<CampusPoint, Distance>>> {
        dijkstra::find_path(&self.graph, start, end)
    }

    /// Building with the given abbreviation.
    pub fn building(&self, abbr: &str) -> Option<&CampusPoint> {
        self.by_abbr.get(abbr)
    }

    /// All buildings, sorted by abbreviation.
    pub fn buildings(&self) -> impl Iterator<Item = &CampusPoint> + '_ {
        self.by_abbr.values()
    }

    /// Compass heading from `from` to `to`.
    pub fn direction(from: &CampusPoint, to: &CampusPoint) -> Compass {
        Compass::between(from, to)
    }

    /// Expand a route into legs with headings.
    pub fn directions(route: &Route<CampusPoint, Distance>) -> Vec<Leg> {
        route
            .legs()
            .map(|(from, edge)| Leg {
                from: from.clone(),
                to: edge.destination().clone(),
                distance: *edge.label(),
                heading: Compass::between(from, edge.destination()),
            })
            .collect()
    }

    /// Read-only view of the underlying graph.
    pub fn graph(&self) -> &Graph<CampusPoint, Distance> {
        &self.graph
    }

    /// Every point on the map, in no particular order.
    pub fn iter(&self) -> Nodes<'_, CampusPoint, Distance> {
        self.graph.nodes()
    }
}

impl<'a> IntoIterator for &'a CampusMap {
    type Item = &'a CampusPoint;
    type IntoIter = Nodes<'a, CampusPoint, Distance>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
