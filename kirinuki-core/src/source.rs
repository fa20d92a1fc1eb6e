//! Graph-source abstractions for the kirinuki sampling runtime.

use crate::error::GraphSourceError;

/// Abstraction over an undirected graph that can be sampled.
///
/// Implementations must identify nodes by contiguous indices in
/// `0..node_count()`, report each undirected edge exactly once from
/// [`edges`](Self::edges) (in either endpoint order), and return
/// [`GraphSourceError::NodeOutOfBounds`] from
/// [`neighbors`](Self::neighbors) for indices outside the node range.
/// Neighbor lists must agree with the edge list: `b` appears in
/// `neighbors(a)` exactly when the edge `{a, b}` is reported.
///
/// # Examples
/// ```
/// use kirinuki_core::{GraphSource, GraphSourceError};
///
/// struct Triangle;
///
/// impl GraphSource for Triangle {
///     fn node_count(&self) -> usize { 3 }
///     fn name(&self) -> &str { "triangle" }
///     fn edges(&self) -> Vec<(usize, usize)> { vec![(0, 1), (1, 2), (2, 0)] }
///     fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError> {
///         match node {
///             0 => Ok(vec![1, 2]),
///             1 => Ok(vec![0, 2]),
///             2 => Ok(vec![0, 1]),
///             _ => Err(GraphSourceError::NodeOutOfBounds { node }),
///         }
///     }
/// }
///
/// let graph = Triangle;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(!graph.is_empty());
/// assert_eq!(graph.neighbors(1)?, vec![0, 2]);
/// # Ok::<(), GraphSourceError>(())
/// ```
pub trait GraphSource {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns whether the graph contains no nodes.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::{GraphSource, GraphSourceError};
    /// struct Empty;
    /// impl GraphSource for Empty {
    ///     fn node_count(&self) -> usize { 0 }
    ///     fn name(&self) -> &str { "empty" }
    ///     fn edges(&self) -> Vec<(usize, usize)> { Vec::new() }
    ///     fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError> {
    ///         Err(GraphSourceError::NodeOutOfBounds { node })
    ///     }
    /// }
    /// assert!(Empty.is_empty());
    /// ```
    #[must_use]
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Returns a human-readable name used in diagnostics.
    fn name(&self) -> &str;

    /// Enumerates every undirected edge once, as raw endpoint pairs.
    ///
    /// The endpoint order within a pair is not significant; the sampler
    /// canonicalizes pairs before use.
    fn edges(&self) -> Vec<(usize, usize)>;

    /// Returns the number of edges in the graph.
    ///
    /// The default implementation materializes [`edges`](Self::edges);
    /// implementations with a cheaper count should override it.
    #[must_use]
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// Returns the neighbors of `node`.
    ///
    /// # Errors
    /// Returns [`GraphSourceError::NodeOutOfBounds`] when `node` is outside
    /// `0..node_count()`.
    fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Path3;

    impl GraphSource for Path3 {
        fn node_count(&self) -> usize {
            3
        }

        fn name(&self) -> &str {
            "path3"
        }

        fn edges(&self) -> Vec<(usize, usize)> {
            vec![(0, 1), (1, 2)]
        }

        fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError> {
            match node {
                0 => Ok(vec![1]),
                1 => Ok(vec![0, 2]),
                2 => Ok(vec![1]),
                _ => Err(GraphSourceError::NodeOutOfBounds { node }),
            }
        }
    }

    #[test]
    fn edge_count_defaults_to_enumerated_edges() {
        assert_eq!(Path3.edge_count(), 2);
    }

    #[test]
    fn is_empty_defaults_to_node_count() {
        assert!(!Path3.is_empty());
    }

    #[test]
    fn neighbors_rejects_out_of_range_nodes() {
        let err = Path3.neighbors(7).expect_err("node 7 does not exist");
        assert_eq!(err, GraphSourceError::NodeOutOfBounds { node: 7 });
    }
}
