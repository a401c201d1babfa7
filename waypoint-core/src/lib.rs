//! Waypoint Core - labeled multigraphs and deterministic shortest paths.
//!
//! This crate provides the routing engine behind the `waypoint` CLI:
//!
//! - **Graph**: a generic directed multigraph whose edges carry labels
//! - **Shortest paths**: Dijkstra with a total tie-break, so equal-cost
//!   queries always return the same route
//! - **Campus model**: points, buildings and compass headings loaded from
//!   plain-text map data
//!
//! # Example
//!
//! ```
//! use waypoint_core::{find_path, Distance, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_nodes(["gate", "library", "lab"]);
//! graph.add_edge(&"gate", &"library", Distance::new(120.0)?)?;
//! graph.add_edge(&"library", &"lab", Distance::new(80.0)?)?;
//!
//! let route = find_path(&graph, &"gate", &"lab")?.expect("reachable");
//! assert_eq!(route.total().value(), 200.0);
//! # Ok::<(), waypoint_core::GraphError>(())
//! ```

pub mod campus;
pub mod dijkstra;
pub mod edge;
pub mod error;
pub mod graph;
pub mod weight;

pub use campus::{CampusMap, CampusPoint, Compass, DataError, Leg};
pub use dijkstra::{find_path, Route};
pub use edge::Edge;
pub use error::{GraphError, Result};
pub use graph::{EdgeSet, Graph, Node, Nodes};
pub use weight::{Distance, Weight};
