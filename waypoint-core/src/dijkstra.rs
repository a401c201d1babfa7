//! Deterministic single-source shortest paths (Dijkstra).
//!
//! [`find_path`] answers "what is the cheapest way from `start` to `end`"
//! over a [`Graph`] and returns the route as an ordered list of edges.
//!
//! # Determinism
//!
//! Edge weights alone do not pick a unique path when several routes tie on
//! total cost. Every candidate in the frontier is therefore ranked by a total
//! key:
//!
//! 1. cumulative distance,
//! 2. the destination node's natural order,
//! 3. the label of the edge that reached it,
//! 4. the predecessor node's natural order.
//!
//! Relaxation pushes candidates that *tie* the best known distance as well as
//! those that beat it, so every equal-cost predecessor competes and the
//! smallest key wins. The answer depends only on graph contents, never on
//! hash iteration order.
//!
//! # Complexity
//!
//! Binary-heap frontier with lazy deletion: O((V + E) log V).
//!
//! # Weights
//!
//! Weights must be non-negative. [`Distance`](crate::Distance) and unsigned
//! integers guarantee this by construction.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::edge::Edge;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node};
use crate::weight::Weight;

/// A path from `start`, as the ordered edges taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route<N, W> {
    start: N,
    edges: Vec<Edge<N, W>>,
    total: W,
}

impl<N, W: Weight> Route<N, W> {
    /// The zero-length route that starts and ends at `start`.
    pub fn empty(start: N) -> Self {
        Self {
            start,
            edges: Vec::new(),
            total: W::ZERO,
        }
    }
}

impl<N, W> Route<N, W> {
    /// First node of the route.
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Last node of the route (the start for an empty route).
    pub fn end(&self) -> &N {
        self.edges
            .last()
            .map(Edge::destination)
            .unwrap_or(&self.start)
    }

    /// Edges in travel order. The first edge leaves [`Route::start`].
    pub fn edges(&self) -> &[Edge<N, W>] {
        &self.edges
    }

    /// Consume the route, keeping only its edges.
    pub fn into_edges(self) -> Vec<Edge<N, W>> {
        self.edges
    }

    /// Sum of all edge labels.
    pub fn total(&self) -> &W {
        &self.total
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True when start and end are the same node.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Each edge paired with the node it leaves from.
    pub fn legs(&self) -> impl Iterator<Item = (&N, &Edge<N, W>)> + '_ {
        std::iter::once(&self.start)
            .chain(self.edges.iter().map(Edge::destination))
            .zip(self.edges.iter())
    }
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the smallest key first.
struct Candidate<'g, N, W> {
    distance: W,
    node: &'g N,
    label: W,
    via: Option<&'g N>,
}

impl<N: Ord, W: Ord> Candidate<'_, N, W> {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(other.node))
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.via.cmp(&other.via))
    }
}

impl<N: Ord, W: Ord> PartialEq for Candidate<'_, N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key_cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, W: Ord> Eq for Candidate<'_, N, W> {}

impl<N: Ord, W: Ord> PartialOrd for Candidate<'_, N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, W: Ord> Ord for Candidate<'_, N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.key_cmp(self)
    }
}

/// Find the shortest route from `start` to `end`.
///
/// # Returns
///
/// - `Ok(Some(route))` - cheapest route; empty if `start == end`
/// - `Ok(None)` - `end` is unreachable from `start`
/// - `Err(GraphError::NodeNotFound)` - `start` or `end` is not in the graph
///
/// Nodes that were removed but are still the target of dangling edges are
/// treated as dead ends.
pub fn find_path<N: Node, W: Weight>(
    graph: &Graph<N, W>,
    start: &N,
    end: &N,
) -> Result<Option<Route<N, W>>> {
    if !graph.contains(start) {
        return Err(GraphError::node_not_found(start));
    }
    if !graph.contains(end) {
        return Err(GraphError::node_not_found(end));
    }
    if start == end {
        return Ok(Some(Route::empty(start.clone())));
    }

    // Best tentative distance per node
    let mut best: HashMap<&N, W> = HashMap::new();
    // Settled nodes mapped to the (predecessor, label) they were reached by
    let mut settled: HashMap<&N, Option<(&N, W)>> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best.insert(start, W::ZERO);
    frontier.push(Candidate {
        distance: W::ZERO,
        node: start,
        label: W::ZERO,
        via: None,
    });

    while let Some(Candidate {
        distance,
        node,
        label,
        via,
    }) = frontier.pop()
    {
        // Stale entry: a smaller key already settled this node
        if settled.contains_key(node) {
            continue;
        }
        settled.insert(node, via.map(|prev| (prev, label)));

        if node == end {
            debug!(settled = settled.len(), total = ?distance, "route found");
            return Ok(Some(reconstruct(&settled, start, end, distance)));
        }

        // Dangling destination of a removed node
        let Some(edges) = graph.edges(node) else {
            continue;
        };

        for edge in edges {
            let next = edge.destination();
            if settled.contains_key(next) {
                continue;
            }

            let candidate = distance.accumulate(*edge.label());
            let competes = best.get(next).map_or(true, |&known| candidate <= known);
            if competes {
                best.insert(next, candidate);
                frontier.push(Candidate {
                    distance: candidate,
                    node: next,
                    label: *edge.label(),
                    via: Some(node),
                });
            }
        }
    }

    debug!(settled = settled.len(), "no route");
    Ok(None)
}

/// Walk predecessor links back from `end` and reverse into travel order.
fn reconstruct<N: Node, W: Weight>(
    settled: &HashMap<&N, Option<(&N, W)>>,
    start: &N,
    end: &N,
    total: W,
) -> Route<N, W> {
    let mut edges = Vec::new();
    let mut current = end;

    while let Some(&Some((prev, label))) = settled.get(current) {
        edges.push(Edge::new(label, current.clone()));
        current = prev;
    }
    edges.reverse();

    Route {
        start: start.clone(),
        edges,
        total,
    }
}
