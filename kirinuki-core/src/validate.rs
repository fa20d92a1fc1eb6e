//! Pre-draw validation shared by the sampling entry points.

use std::{num::NonZeroUsize, sync::Arc};

use tracing::warn;

use crate::{Result, error::SamplerError, source::GraphSource};

/// Rejects graphs with no nodes or no edges.
pub(crate) fn ensure_non_empty<G: GraphSource + ?Sized>(graph: &G) -> Result<()> {
    if graph.node_count() == 0 || graph.edge_count() == 0 {
        warn!(graph = %graph.name(), "graph has no nodes or no edges");
        return Err(SamplerError::EmptyGraph {
            graph: Arc::from(graph.name()),
        });
    }
    Ok(())
}

/// Rejects targets that exceed the number of distinct edges on offer.
pub(crate) fn ensure_edge_budget(
    graph: &str,
    requested: NonZeroUsize,
    available: usize,
) -> Result<()> {
    if requested.get() > available {
        warn!(
            graph,
            requested = requested.get(),
            available,
            "sample size exceeds graph edge count"
        );
        return Err(SamplerError::SampleExceedsGraph {
            graph: Arc::from(graph),
            requested: requested.get(),
            available,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphSourceError;

    struct Fixed {
        nodes: usize,
        edges: Vec<(usize, usize)>,
    }

    impl GraphSource for Fixed {
        fn node_count(&self) -> usize {
            self.nodes
        }

        fn name(&self) -> &str {
            "fixed"
        }

        fn edges(&self) -> Vec<(usize, usize)> {
            self.edges.clone()
        }

        fn neighbors(&self, node: usize) -> core::result::Result<Vec<usize>, GraphSourceError> {
            if node >= self.nodes {
                return Err(GraphSourceError::NodeOutOfBounds { node });
            }
            Ok(self
                .edges
                .iter()
                .filter_map(|&(a, b)| match node {
                    n if n == a => Some(b),
                    n if n == b => Some(a),
                    _ => None,
                })
                .collect())
        }
    }

    #[test]
    fn non_empty_accepts_populated_graph() {
        let graph = Fixed {
            nodes: 2,
            edges: vec![(0, 1)],
        };
        assert!(ensure_non_empty(&graph).is_ok());
    }

    #[test]
    fn non_empty_rejects_graph_without_nodes() {
        let graph = Fixed {
            nodes: 0,
            edges: Vec::new(),
        };
        let err = ensure_non_empty(&graph).expect_err("empty graph must be rejected");
        assert!(matches!(err, SamplerError::EmptyGraph { .. }));
    }

    #[test]
    fn non_empty_rejects_graph_without_edges() {
        let graph = Fixed {
            nodes: 3,
            edges: Vec::new(),
        };
        let err = ensure_non_empty(&graph).expect_err("edgeless graph must be rejected");
        assert!(matches!(err, SamplerError::EmptyGraph { .. }));
    }

    #[test]
    fn edge_budget_accepts_exact_fit() {
        let requested = NonZeroUsize::new(3).expect("non-zero");
        assert!(ensure_edge_budget("fixed", requested, 3).is_ok());
    }

    #[test]
    fn edge_budget_rejects_overdraw() {
        let requested = NonZeroUsize::new(4).expect("non-zero");
        let err =
            ensure_edge_budget("fixed", requested, 3).expect_err("overdraw must be rejected");
        assert_eq!(
            err,
            SamplerError::SampleExceedsGraph {
                graph: Arc::from("fixed"),
                requested: 4,
                available: 3,
            },
        );
    }
}
