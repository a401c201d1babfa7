//! Readers for the campus data files.
//!
//! Buildings are one per line:
//!
//! ```text
//! # abbr <TAB> full name <TAB> x <TAB> y
//! BOS	Boston Red Sox	3	7
//! ```
//!
//! Paths are grouped under an unindented source point, with one
//! tab-indented `x,y: distance` line per outgoing edge:
//!
//! ```text
//! 1,4
//! 	3,7: 5.0
//! 	5,5: 4.5
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use super::CampusPoint;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::weight::Distance;

/// Errors raised while loading campus data.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data on line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl DataError {
    fn malformed(line: usize, message: impl Into<String>) -> Self {
        DataError::Malformed {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

/// Lines that carry data, numbered from 1.
fn data_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.starts_with('#') && !line.trim().is_empty())
}

fn parse_number(token: &str, line: usize) -> Result<f64> {
    let token = token.trim();
    token
        .parse::<f64>()
        .map_err(|_| DataError::malformed(line, format!("'{token}' is not a number")))
}

fn parse_coords(text: &str, line: usize) -> Result<(f64, f64)> {
    let mut tokens = text.split(',');
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Ok((parse_number(x, line)?, parse_number(y, line)?)),
        _ => Err(DataError::malformed(
            line,
            format!("expected 'x,y' coordinates, found '{}'", text.trim()),
        )),
    }
}

/// Parse a buildings file into points, in file order.
pub fn parse_buildings(source: &str) -> Result<Vec<CampusPoint>> {
    let mut buildings = Vec::new();

    for (line, text) in data_lines(source) {
        let tokens: Vec<&str> = text.split('\t').collect();
        let [abbr, name, x, y] = tokens.as_slice() else {
            return Err(DataError::malformed(
                line,
                format!("expected 4 tab-separated fields, found {}", tokens.len()),
            ));
        };

        let point = CampusPoint::building(
            *abbr,
            *name,
            parse_number(x, line)?,
            parse_number(y, line)?,
        );
        buildings.push(point);
    }

    debug!(count = buildings.len(), "Parsed buildings");
    Ok(buildings)
}

/// Parse a paths file into `graph`.
///
/// Endpoints whose coordinates match an entry of `buildings` are stored as
/// that building, so routes between buildings keep their names.
pub fn parse_paths(
    source: &str,
    graph: &mut Graph<CampusPoint, Distance>,
    buildings: &HashSet<CampusPoint>,
) -> Result<()> {
    let resolve = |point: CampusPoint| buildings.get(&point).cloned().unwrap_or(point);
    let mut current: Option<CampusPoint> = None;
    let mut edges = 0usize;

    for (line, text) in data_lines(source) {
        match text.strip_prefix('\t') {
            Some(edge) => {
                let from = current
                    .as_ref()
                    .ok_or_else(|| DataError::malformed(line, "edge listed before any source point"))?;
                let (coords, distance) = edge
                    .split_once(':')
                    .ok_or_else(|| DataError::malformed(line, "expected 'x,y: distance'"))?;

                let (x, y) = parse_coords(coords, line)?;
                let distance = Distance::new(parse_number(distance, line)?)?;
                let to = resolve(CampusPoint::new(x, y));

                graph.add_node(to.clone());
                graph.add_edge(from, &to, distance)?;
                edges += 1;
            }
            None => {
                let (x, y) = parse_coords(text, line)?;
                let point = resolve(CampusPoint::new(x, y));
                graph.add_node(point.clone());
                current = Some(point);
            }
        }
    }

    debug!(points = graph.node_count(), edges, "Parsed paths");
    Ok(())
}
