//! Builder utilities for configuring the hybrid node-edge sampler.
//!
//! Exposes the configuration surface and the validation performed before
//! constructing [`HybridNodeEdgeSampler`] instances.

use std::num::NonZeroUsize;

use crate::{Result, error::SamplerError, sampler::HybridNodeEdgeSampler};

const DEFAULT_NUMBER_OF_EDGES: usize = 100;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_P: f64 = 0.8;

/// Configures and constructs [`HybridNodeEdgeSampler`] instances.
///
/// # Examples
/// ```
/// use kirinuki_core::SamplerBuilder;
///
/// let sampler = SamplerBuilder::new()
///     .with_number_of_edges(50)
///     .with_seed(7)
///     .with_p(0.5)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(sampler.number_of_edges().get(), 50);
/// assert_eq!(sampler.seed(), 7);
/// assert!((sampler.p() - 0.5).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone)]
pub struct SamplerBuilder {
    number_of_edges: usize,
    seed: u64,
    p: f64,
}

impl Default for SamplerBuilder {
    fn default() -> Self {
        Self {
            number_of_edges: DEFAULT_NUMBER_OF_EDGES,
            seed: DEFAULT_SEED,
            p: DEFAULT_P,
        }
    }
}

impl SamplerBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new();
    /// assert_eq!(builder.number_of_edges(), 100);
    /// assert_eq!(builder.seed(), 42);
    /// assert!((builder.p() - 0.8).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of distinct edges to sample.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_number_of_edges(10);
    /// assert_eq!(builder.number_of_edges(), 10);
    /// ```
    #[must_use]
    pub fn with_number_of_edges(mut self, number_of_edges: usize) -> Self {
        self.number_of_edges = number_of_edges;
        self
    }

    /// Returns the configured number of edges.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_number_of_edges(3);
    /// assert_eq!(builder.number_of_edges(), 3);
    /// ```
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.number_of_edges
    }

    /// Overrides the random seed used to reseed the generator per call.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_seed(1337);
    /// assert_eq!(builder.seed(), 1337);
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Returns the configured random seed.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_seed(99);
    /// assert_eq!(builder.seed(), 99);
    /// ```
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Overrides the hybridization probability.
    ///
    /// Per draw, a uniform value below the probability selects the
    /// node-neighbor branch; otherwise the edge is drawn uniformly from the
    /// full edge list. Must lie in `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_p(0.25);
    /// assert!((builder.p() - 0.25).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn with_p(mut self, p: f64) -> Self {
        self.p = p;
        self
    }

    /// Returns the configured hybridization probability.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let builder = SamplerBuilder::new().with_p(0.1);
    /// assert!((builder.p() - 0.1).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Validates the configuration and constructs a sampler.
    ///
    /// # Errors
    /// Returns [`SamplerError::InvalidEdgeCount`] when the edge count is
    /// zero and [`SamplerError::InvalidProbability`] when the probability is
    /// not a finite value in `[0, 1]`.
    ///
    /// # Examples
    /// ```
    /// use kirinuki_core::SamplerBuilder;
    ///
    /// let sampler = SamplerBuilder::new().build().expect("defaults are valid");
    /// assert_eq!(sampler.number_of_edges().get(), 100);
    /// ```
    pub fn build(self) -> Result<HybridNodeEdgeSampler> {
        let number_of_edges = NonZeroUsize::new(self.number_of_edges).ok_or(
            SamplerError::InvalidEdgeCount {
                got: self.number_of_edges,
            },
        )?;
        if !self.p.is_finite() || !(0.0..=1.0).contains(&self.p) {
            return Err(SamplerError::InvalidProbability { got: self.p });
        }

        Ok(HybridNodeEdgeSampler::new(
            number_of_edges,
            self.p,
            self.seed,
        ))
    }
}
