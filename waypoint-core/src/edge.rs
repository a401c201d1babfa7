//! Labeled outgoing edges.

use std::fmt;

use serde::Serialize;

/// An immutable edge as stored in a node's adjacency set.
///
/// The source node is the adjacency key, so only the label and the
/// destination are kept. Two edges are equal iff both fields are equal.
/// Edges order by destination first, then by label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge<N, W> {
    destination: N,
    label: W,
}

impl<N, W> Edge<N, W> {
    /// Create an edge with the given label pointing at `destination`.
    pub fn new(label: W, destination: N) -> Self {
        Self { destination, label }
    }

    /// The edge label (its weight).
    pub fn label(&self) -> &W {
        &self.label
    }

    /// The node this edge points to.
    pub fn destination(&self) -> &N {
        &self.destination
    }

    /// Split into `(label, destination)`.
    pub fn into_parts(self) -> (W, N) {
        (self.label, self.destination)
    }
}

impl<N: fmt::Display, W: fmt::Display> fmt::Display for Edge<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.destination, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let edge = Edge::new(7u32, "NYY");
        assert_eq!(*edge.label(), 7);
        assert_eq!(*edge.destination(), "NYY");
        assert_eq!(edge.into_parts(), (7, "NYY"));
    }

    #[test]
    fn test_equality_uses_label_and_destination() {
        assert_eq!(Edge::new(1u32, "a"), Edge::new(1u32, "a"));
        assert_ne!(Edge::new(1u32, "a"), Edge::new(2u32, "a"));
        assert_ne!(Edge::new(1u32, "a"), Edge::new(1u32, "b"));
    }

    #[test]
    fn test_set_dedupes_identical_edges() {
        let mut set = HashSet::new();
        assert!(set.insert(Edge::new(3u32, "x")));
        assert!(!set.insert(Edge::new(3u32, "x")));
        assert!(set.insert(Edge::new(4u32, "x")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_ordering_destination_then_label() {
        let mut edges = vec![
            Edge::new(1u32, "b"),
            Edge::new(9u32, "a"),
            Edge::new(2u32, "a"),
        ];
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(2u32, "a"), Edge::new(9u32, "a"), Edge::new(1u32, "b")]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Edge::new(5u32, "BOS").to_string(), "BOS(5)");
    }
}
