//! Error types for waypoint-core.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Caller errors raised by the graph and the shortest-path engine.
///
/// Expected absence (a node that is not there, a route that does not exist)
/// is reported through `Option` instead; these variants mean the call itself
/// was invalid and has to be fixed by the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation required a node that is not in the graph.
    #[error("Node not found in graph: {node}")]
    NodeNotFound {
        /// Debug rendering of the missing node.
        node: String,
    },

    /// A weight was NaN, infinite or negative.
    #[error("Invalid weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight {
        /// The rejected value.
        value: f64,
    },
}

impl GraphError {
    pub(crate) fn node_not_found<N: std::fmt::Debug>(node: &N) -> Self {
        GraphError::NodeNotFound {
            node: format!("{:?}", node),
        }
    }
}
