//! Result type for sampling operations.
//!
//! Provides the edge-induced subgraph returned by the sampler: a sorted,
//! deduplicated edge list together with the node set implied by the edge
//! endpoints.

use crate::edge::Edge;

/// The edge-induced subgraph produced by a sampling call.
///
/// Node identifiers are preserved from the parent graph; the node set is
/// exactly the set of endpoints touched by the sampled edges, so isolated
/// nodes never appear. Edges and nodes are stored sorted, making equal edge
/// sets compare equal regardless of the order they were sampled in.
///
/// # Examples
/// ```
/// use kirinuki_core::{Edge, Subgraph};
///
/// let subgraph = Subgraph::from_edges(vec![Edge::new(4, 1), Edge::new(1, 4), Edge::new(2, 4)]);
/// assert_eq!(subgraph.edge_count(), 2);
/// assert_eq!(subgraph.nodes(), &[1, 2, 4]);
/// assert!(subgraph.contains_edge(Edge::new(1, 4)));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Subgraph {
    nodes: Vec<usize>,
    edges: Vec<Edge>,
}

impl Subgraph {
    /// Builds a subgraph from an edge list.
    ///
    /// Edges are canonical by construction of [`Edge`]; duplicates collapse
    /// and the node set is derived from the remaining endpoints.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::{Edge, Subgraph};
    ///
    /// let subgraph = Subgraph::from_edges(vec![Edge::new(0, 1), Edge::new(1, 0)]);
    /// assert_eq!(subgraph.edge_count(), 1);
    /// assert_eq!(subgraph.node_count(), 2);
    /// ```
    #[must_use]
    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        let mut edges: Vec<Edge> = edges.into_iter().collect();
        edges.sort_unstable();
        edges.dedup();

        let mut nodes: Vec<usize> = edges
            .iter()
            .flat_map(|edge| [edge.source(), edge.target()])
            .collect();
        nodes.sort_unstable();
        nodes.dedup();

        Self { nodes, edges }
    }

    /// Returns the number of distinct nodes touched by the sampled edges.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct edges in the subgraph.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::{Edge, Subgraph};
    ///
    /// let subgraph = Subgraph::from_edges(vec![Edge::new(0, 1), Edge::new(1, 2)]);
    /// assert_eq!(subgraph.edge_count(), 2);
    /// ```
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the subgraph contains no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the sorted node identifiers.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns the sorted canonical edges.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns whether the subgraph contains the given edge.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::{Edge, Subgraph};
    ///
    /// let subgraph = Subgraph::from_edges(vec![Edge::new(0, 1)]);
    /// assert!(subgraph.contains_edge(Edge::new(1, 0)));
    /// assert!(!subgraph.contains_edge(Edge::new(0, 2)));
    /// ```
    #[must_use]
    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.edges.binary_search(&edge).is_ok()
    }
}

impl FromIterator<Edge> for Subgraph {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl<'a> IntoIterator for &'a Subgraph {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}
