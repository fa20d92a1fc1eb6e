//! Hybrid node-edge sampling entry points.
//!
//! [`HybridNodeEdgeSampler`] grows a set of distinct edges by repeatedly
//! choosing between two draw strategies: with probability `p` it picks a
//! uniform random node and then a uniform random neighbour of that node, and
//! otherwise it picks uniformly from the graph's edge list. The node branch
//! biases the sample towards the neighbourhoods of high-degree nodes while
//! the edge branch keeps every edge reachable, so `p` interpolates between
//! the two regimes.
//!
//! With the `metrics` feature enabled, sampling increments the
//! `sampler_draws_total`, `sampler_duplicate_draws_total`, and
//! `sampler_exhaustive_fills_total` counters.

use std::{collections::HashSet, num::NonZeroUsize, sync::Arc};

use rand::{Rng, SeedableRng, distributions::Standard, rngs::SmallRng, seq::SliceRandom};
use tracing::{debug, instrument, warn};

use crate::{
    Result,
    edge::Edge,
    error::SamplerError,
    source::GraphSource,
    subgraph::Subgraph,
    validate::{ensure_edge_budget, ensure_non_empty},
};

/// Multiplier for the total draw budget. Duplicate draws dominate once most
/// of the edge list has been sampled, so the budget scales with both the
/// pool size and the target.
const DRAW_BUDGET_FACTOR: usize = 32;

/// Samples a fixed number of distinct edges from a [`GraphSource`].
///
/// Instances are created through [`SamplerBuilder`](crate::SamplerBuilder)
/// and may be reused across graphs; every [`sample`](Self::sample) call
/// reseeds its own generator, so repeated calls with the same graph produce
/// the same subgraph. No state is kept between calls, so one instance can
/// serve concurrent callers.
///
/// # Examples
/// ```
/// use kirinuki_core::{GraphSource, GraphSourceError, SamplerBuilder};
///
/// struct Cycle(usize);
///
/// impl GraphSource for Cycle {
///     fn node_count(&self) -> usize {
///         self.0
///     }
///
///     fn name(&self) -> &str {
///         "cycle"
///     }
///
///     fn edges(&self) -> Vec<(usize, usize)> {
///         (0..self.0).map(|n| (n, (n + 1) % self.0)).collect()
///     }
///
///     fn neighbors(&self, node: usize) -> Result<Vec<usize>, GraphSourceError> {
///         if node >= self.0 {
///             return Err(GraphSourceError::NodeOutOfBounds { node });
///         }
///         Ok(vec![(node + self.0 - 1) % self.0, (node + 1) % self.0])
///     }
/// }
///
/// # fn main() -> Result<(), kirinuki_core::SamplerError> {
/// let sampler = SamplerBuilder::new()
///     .with_number_of_edges(2)
///     .with_p(0.0)
///     .build()?;
/// let subgraph = sampler.sample(&Cycle(4))?;
/// assert_eq!(subgraph.edge_count(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HybridNodeEdgeSampler {
    number_of_edges: NonZeroUsize,
    p: f64,
    seed: u64,
}

impl HybridNodeEdgeSampler {
    pub(crate) fn new(number_of_edges: NonZeroUsize, p: f64, seed: u64) -> Self {
        Self {
            number_of_edges,
            p,
            seed,
        }
    }

    /// Returns the number of distinct edges each sample produces.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let sampler = SamplerBuilder::new()
    ///     .with_number_of_edges(9)
    ///     .build()
    ///     .expect("builder must accept a non-zero edge count");
    /// assert_eq!(sampler.number_of_edges().get(), 9);
    /// ```
    #[must_use]
    pub fn number_of_edges(&self) -> NonZeroUsize {
        self.number_of_edges
    }

    /// Returns the hybridization probability.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let sampler = SamplerBuilder::new()
    ///     .with_p(0.3)
    ///     .build()
    ///     .expect("builder must accept probabilities in [0, 1]");
    /// assert!((sampler.p() - 0.3).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Returns the seed used to reseed the generator on every call.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let sampler = SamplerBuilder::new()
    ///     .with_seed(11)
    ///     .build()
    ///     .expect("builder configuration is valid");
    /// assert_eq!(sampler.seed(), 11);
    /// ```
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Samples the configured number of distinct edges from `graph`.
    ///
    /// The returned [`Subgraph`] keeps the node identifiers of `graph` and
    /// contains exactly [`number_of_edges`](Self::number_of_edges) edges,
    /// each present in `graph`.
    ///
    /// # Errors
    /// Returns [`SamplerError::EmptyGraph`] when `graph` has no nodes or no
    /// edges, [`SamplerError::SampleExceedsGraph`] when the target exceeds
    /// the number of distinct edges in `graph`, and [`SamplerError::Source`]
    /// when the graph fails to report a neighbourhood.
    #[instrument(
        name = "sampler.sample",
        err,
        skip(self, graph),
        fields(
            graph = %graph.name(),
            nodes = graph.node_count(),
            target = self.number_of_edges.get(),
            p = self.p
        )
    )]
    pub fn sample<G: GraphSource + ?Sized>(&self, graph: &G) -> Result<Subgraph> {
        ensure_non_empty(graph)?;
        ensure_edge_budget(graph.name(), self.number_of_edges, graph.edge_count())?;
        // Canonicalise and dedup so the budget re-check and the edge branch
        // see each undirected edge exactly once. Sources whose edge_count()
        // disagrees with their edge list are caught against the pool.
        let mut pool: Vec<Edge> = graph.edges().into_iter().map(Edge::from).collect();
        pool.sort_unstable();
        pool.dedup();
        ensure_edge_budget(graph.name(), self.number_of_edges, pool.len())?;

        let target = self.number_of_edges.get();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut sampled = HashSet::with_capacity(target);
        let budget = draw_budget(pool.len(), target);
        let mut draws = 0_usize;
        while sampled.len() < target && draws < budget {
            draws += 1;
            record_draw();
            let Some(edge) = self.draw_edge(graph, &pool, &mut rng)? else {
                continue;
            };
            if !sampled.insert(edge) {
                record_duplicate_draw();
            }
        }
        if sampled.len() < target {
            warn!(
                draws,
                sampled = sampled.len(),
                target,
                "draw budget exhausted, filling from remaining edges"
            );
            record_exhaustive_fill();
            self.fill_remaining(&pool, &mut sampled, &mut rng);
        }
        debug!(draws, edges = sampled.len(), "sampling completed");

        Ok(Subgraph::from_edges(sampled))
    }

    /// Performs one hybrid draw, returning `None` when the node branch lands
    /// on a node without neighbours.
    fn draw_edge<G: GraphSource + ?Sized>(
        &self,
        graph: &G,
        pool: &[Edge],
        rng: &mut SmallRng,
    ) -> Result<Option<Edge>> {
        let score: f64 = rng.sample(Standard);
        if score < self.p {
            let source = rng.gen_range(0..graph.node_count());
            let neighbours = graph
                .neighbors(source)
                .map_err(|error| SamplerError::Source {
                    graph: Arc::from(graph.name()),
                    error,
                })?;
            let Some(&target) = neighbours.choose(rng) else {
                return Ok(None);
            };
            Ok(Some(Edge::new(source, target)))
        } else {
            Ok(pool.choose(rng).copied())
        }
    }

    /// Tops up `sampled` to the target from a shuffle of the unsampled pool.
    ///
    /// Uses the same generator stream as the draw loop, so the fall-back
    /// stays deterministic for a given seed.
    fn fill_remaining(&self, pool: &[Edge], sampled: &mut HashSet<Edge>, rng: &mut SmallRng) {
        let target = self.number_of_edges.get();
        let mut remaining: Vec<Edge> = pool
            .iter()
            .copied()
            .filter(|edge| !sampled.contains(edge))
            .collect();
        remaining.shuffle(rng);
        for edge in remaining {
            sampled.insert(edge);
            if sampled.len() == target {
                break;
            }
        }
    }
}

fn draw_budget(pool: usize, target: usize) -> usize {
    pool.saturating_add(target).saturating_mul(DRAW_BUDGET_FACTOR)
}

#[cfg(feature = "metrics")]
fn record_draw() {
    metrics::counter!("sampler_draws_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_draw() {}

#[cfg(feature = "metrics")]
fn record_duplicate_draw() {
    metrics::counter!("sampler_duplicate_draws_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_duplicate_draw() {}

#[cfg(feature = "metrics")]
fn record_exhaustive_fill() {
    metrics::counter!("sampler_exhaustive_fills_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_exhaustive_fill() {}
