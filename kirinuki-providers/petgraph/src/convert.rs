//! Conversion of sampled subgraphs back into petgraph form.

use std::collections::HashMap;

use kirinuki_core::Subgraph;
use petgraph::graph::UnGraph;

/// Builds an undirected petgraph graph from a sampled subgraph.
///
/// Each subgraph node becomes one graph node whose weight carries the node
/// identifier from the sampled parent graph; petgraph assigns fresh,
/// compact indices.
///
/// # Examples
/// ```
/// use kirinuki_core::{Edge, Subgraph};
/// use kirinuki_providers_petgraph::to_ungraph;
///
/// let subgraph = Subgraph::from_edges(vec![Edge::new(4, 7), Edge::new(7, 9)]);
/// let graph = to_ungraph(&subgraph);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.node_weights().copied().collect::<Vec<_>>(), vec![4, 7, 9]);
/// ```
#[must_use]
pub fn to_ungraph(subgraph: &Subgraph) -> UnGraph<usize, ()> {
    let mut graph = UnGraph::with_capacity(subgraph.node_count(), subgraph.edge_count());
    let mut indices = HashMap::with_capacity(subgraph.node_count());
    for &node in subgraph.nodes() {
        indices.insert(node, graph.add_node(node));
    }
    for edge in subgraph.edges() {
        if let (Some(&a), Some(&b)) = (indices.get(&edge.source()), indices.get(&edge.target())) {
            graph.add_edge(a, b, ());
        }
    }
    graph
}
