//! Property tests for the sampling contract over generated graphs.

mod common;

use std::collections::HashSet;

use common::EdgeListGraph;
use kirinuki_core::{Edge, GraphSource, SamplerBuilder};
use proptest::prelude::*;
use proptest::sample::Index;

/// Generates small graphs with at least one edge from a random pair mask.
fn sparse_graph_strategy() -> impl Strategy<Value = EdgeListGraph> {
    (2_usize..10).prop_flat_map(|nodes| {
        let pairs = nodes * (nodes - 1) / 2;
        proptest::collection::vec(any::<bool>(), pairs).prop_map(move |mask| {
            let mut include = mask.into_iter();
            let mut edges = Vec::new();
            for a in 0..nodes {
                for b in (a + 1)..nodes {
                    if include.next().unwrap_or(false) {
                        edges.push((a, b));
                    }
                }
            }
            if edges.is_empty() {
                edges.push((0, 1));
            }
            EdgeListGraph::new("generated", nodes, edges)
        })
    })
}

proptest! {
    #[test]
    fn sample_meets_contract(
        graph in sparse_graph_strategy(),
        target_index in any::<Index>(),
        p in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let target = target_index.index(graph.edge_count()) + 1;
        let sampler = SamplerBuilder::new()
            .with_number_of_edges(target)
            .with_p(p)
            .with_seed(seed)
            .build()
            .expect("configuration must be valid");

        let subgraph = sampler.sample(&graph).expect("sampling must succeed");

        prop_assert_eq!(subgraph.edge_count(), target);
        let pool: HashSet<Edge> = graph.edges().into_iter().map(Edge::from).collect();
        prop_assert!(subgraph.edges().iter().all(|edge| pool.contains(edge)));
        prop_assert!(subgraph.edges().windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(
            subgraph
                .nodes()
                .iter()
                .all(|&node| node < graph.node_count())
        );

        let replay = sampler.sample(&graph).expect("sampling must succeed");
        prop_assert_eq!(&subgraph, &replay);
    }

    #[test]
    fn equal_configurations_agree_on_cycles(
        p in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        let graph = EdgeListGraph::cycle("cycle8", 8);
        let build = || {
            SamplerBuilder::new()
                .with_number_of_edges(3)
                .with_p(p)
                .with_seed(seed)
                .build()
                .expect("configuration must be valid")
        };
        let first = build().sample(&graph).expect("sampling must succeed");
        let second = build().sample(&graph).expect("sampling must succeed");
        prop_assert_eq!(first, second);
    }
}
