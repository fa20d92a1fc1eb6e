//! [`GraphSource`] implementation for petgraph undirected graphs.

use kirinuki_core::{GraphSource, GraphSourceError};
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

/// Named sampling source over a borrowed petgraph undirected graph.
///
/// Node identifiers are the [`NodeIndex::index`] values, which are
/// contiguous as long as no nodes have been removed from the graph. Node
/// and edge weights are ignored, and parallel edges collapse to a single
/// canonical edge during sampling.
pub struct UnGraphSource<'a, N, E> {
    graph: &'a UnGraph<N, E>,
    name: String,
}

impl<'a, N, E> UnGraphSource<'a, N, E> {
    /// Creates a sampling source over `graph`, labelled `name` in error
    /// messages and spans.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::GraphSource;
    /// use kirinuki_providers_petgraph::UnGraphSource;
    /// use petgraph::graph::UnGraph;
    ///
    /// let graph = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2)]);
    /// let source = UnGraphSource::new("path", &graph);
    /// assert_eq!(source.node_count(), 3);
    /// assert_eq!(source.edge_count(), 2);
    /// assert_eq!(source.neighbors(1)?, vec![2, 0]);
    /// # Ok::<(), kirinuki_core::GraphSourceError>(())
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, graph: &'a UnGraph<N, E>) -> Self {
        Self {
            graph,
            name: name.into(),
        }
    }
}

impl<N, E> GraphSource for UnGraphSource<'_, N, E> {
    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
            .collect()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError> {
        if node >= self.graph.node_count() {
            return Err(GraphSourceError::NodeOutOfBounds { node });
        }
        Ok(self
            .graph
            .neighbors(NodeIndex::new(node))
            .map(NodeIndex::index)
            .collect())
    }
}
