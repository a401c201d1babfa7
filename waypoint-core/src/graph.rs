//! Mutable directed labeled multigraph.
//!
//! The graph is an adjacency map from each node to the set of edges it is
//! the source of. It owns every node and edge handed to it and only exposes
//! shared views of its internals, so invariants can only change through the
//! methods below.
//!
//! # Invariants
//!
//! - Node set and every adjacency set have set semantics: adding an edge with
//!   the same label and destination twice stores it once.
//! - [`Graph::add_edge`] requires both endpoints to already be nodes.
//! - [`Graph::remove`] deletes a node and its outgoing edges only. Edges in
//!   *other* nodes' adjacency sets that point at the removed node are kept,
//!   so [`Graph::children`] and [`Graph::edges`] may yield nodes for which
//!   [`Graph::contains`] is `false`.
//!
//! # Example
//!
//! ```
//! use waypoint_core::Graph;
//!
//! let mut g: Graph<&str, u32> = Graph::new();
//! g.add_node("SEA");
//! g.add_node("BOS");
//! assert!(g.add_edge(&"SEA", &"BOS", 5).unwrap());
//! assert_eq!(g.edges_between(&"SEA", &"BOS").unwrap(), 1);
//! ```

use std::collections::hash_map;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::trace;

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::weight::Weight;

/// Requirements on node values: compared by value with a total order.
///
/// The order is what makes shortest-path tie-breaking reproducible.
pub trait Node: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Node for T {}

/// Outgoing edges of a single node.
pub type EdgeSet<N, W> = HashSet<Edge<N, W>>;

/// A mutable directed labeled multigraph.
#[derive(Debug, Clone)]
pub struct Graph<N, W> {
    nodes: HashMap<N, EdgeSet<N, W>>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<N, W> Graph<N, W> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of edges, summed over all adjacency sets.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(HashSet::len).sum()
    }

    /// True if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        trace!(nodes = self.nodes.len(), "clearing graph");
        self.nodes.clear();
    }

    /// Read-only view over all nodes, in unspecified order.
    pub fn nodes(&self) -> Nodes<'_, N, W> {
        Nodes {
            inner: self.nodes.keys(),
        }
    }

    /// Iterate over all nodes. Same as [`Graph::nodes`].
    pub fn iter(&self) -> Nodes<'_, N, W> {
        self.nodes()
    }
}

impl<N: Node, W: Weight> Graph<N, W> {
    /// Create a graph holding a single node.
    pub fn with_node(node: N) -> Self {
        let mut graph = Self::new();
        graph.add_node(node);
        graph
    }

    /// Create a graph from a collection of nodes, with no edges.
    pub fn from_nodes<I: IntoIterator<Item = N>>(nodes: I) -> Self {
        let mut graph = Self::new();
        graph.add_nodes(nodes);
        graph
    }

    /// Insert `node` with no edges.
    ///
    /// Returns `false` (and leaves the node untouched) if it was already
    /// present.
    pub fn add_node(&mut self, node: N) -> bool {
        match self.nodes.entry(node) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                trace!(node = ?entry.key(), "adding node");
                entry.insert(HashSet::new());
                true
            }
        }
    }

    /// Insert every node of `nodes`.
    ///
    /// Returns `true` iff every element was newly added. This is a report,
    /// not a transaction: nodes added before a duplicate was seen stay in
    /// the graph. A value repeated within `nodes` counts as already present
    /// the second time.
    pub fn add_nodes<I: IntoIterator<Item = N>>(&mut self, nodes: I) -> bool {
        nodes
            .into_iter()
            .fold(true, |all_new, node| self.add_node(node) && all_new)
    }

    /// Add an edge labeled `label` from `source` to `destination`.
    ///
    /// Both endpoints must already be in the graph, otherwise this fails
    /// with [`GraphError::NodeNotFound`]. Returns `false` if an edge with
    /// the same label and destination already leaves `source`.
    pub fn add_edge(&mut self, source: &N, destination: &N, label: W) -> Result<bool> {
        if !self.nodes.contains_key(destination) {
            return Err(GraphError::node_not_found(destination));
        }
        let edges = self
            .nodes
            .get_mut(source)
            .ok_or_else(|| GraphError::node_not_found(source))?;

        let inserted = edges.insert(Edge::new(label, destination.clone()));
        trace!(?source, ?destination, ?label, inserted, "adding edge");
        Ok(inserted)
    }

    /// Outgoing edges of `node`.
    ///
    /// `None` means the node is absent; `Some` of an empty set means it has
    /// no outgoing edges. Edges may point at nodes that have since been
    /// removed.
    pub fn edges(&self, node: &N) -> Option<&EdgeSet<N, W>> {
        self.nodes.get(node)
    }

    /// Destinations reachable over one outgoing edge of `node`.
    ///
    /// Empty if the node is absent or has no edges. May include removed
    /// nodes (see the module docs).
    pub fn children(&self, node: &N) -> BTreeSet<&N> {
        self.nodes
            .get(node)
            .map(|edges| edges.iter().map(Edge::destination).collect())
            .unwrap_or_default()
    }

    /// Remove `node` and its outgoing edges, returning them.
    ///
    /// Returns `None` if the node was not present. Edges from other nodes to
    /// `node` are **not** removed.
    pub fn remove(&mut self, node: &N) -> Option<EdgeSet<N, W>> {
        let removed = self.nodes.remove(node);
        if let Some(edges) = &removed {
            trace!(?node, edges = edges.len(), "removed node");
        }
        removed
    }

    /// True if `node` is in the graph.
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of edges leaving `node`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if the node is absent.
    pub fn edge_count_from(&self, node: &N) -> Result<usize> {
        self.nodes
            .get(node)
            .map(HashSet::len)
            .ok_or_else(|| GraphError::node_not_found(node))
    }

    /// Number of edges from `from` to `to`, across all labels.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if either node is absent.
    pub fn edges_between(&self, from: &N, to: &N) -> Result<usize> {
        if !self.nodes.contains_key(to) {
            return Err(GraphError::node_not_found(to));
        }
        let edges = self
            .nodes
            .get(from)
            .ok_or_else(|| GraphError::node_not_found(from))?;
        Ok(edges.iter().filter(|e| e.destination() == to).count())
    }

    /// True if `node` is present and has at least one outgoing edge.
    pub fn has_edges(&self, node: &N) -> bool {
        self.nodes.get(node).is_some_and(|edges| !edges.is_empty())
    }
}

impl<N: Node, W: Weight> FromIterator<N> for Graph<N, W> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self::from_nodes(iter)
    }
}

impl<'a, N, W> IntoIterator for &'a Graph<N, W> {
    type Item = &'a N;
    type IntoIter = Nodes<'a, N, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// Iterator over the nodes of a [`Graph`].
///
/// Borrows the graph, so the graph cannot be mutated while it is alive.
pub struct Nodes<'a, N, W> {
    inner: hash_map::Keys<'a, N, EdgeSet<N, W>>,
}

impl<N, W> Clone for Nodes<'_, N, W> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, N, W> Iterator for Nodes<'a, N, W> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<N, W> ExactSizeIterator for Nodes<'_, N, W> {}
