//! Error types for the kirinuki core library.
//!
//! Defines the error enums exposed by the public API, stable machine-readable
//! error codes, and a convenient result alias.

use std::sync::Arc;

use thiserror::Error;

/// An error produced by [`crate::GraphSource`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphSourceError {
    /// Requested node was outside the source's index range.
    #[error("node {node} is out of bounds")]
    NodeOutOfBounds {
        /// The requested node identifier that exceeded the source bounds.
        node: usize,
    },
}

impl GraphSourceError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphSourceErrorCode {
        match self {
            Self::NodeOutOfBounds { .. } => GraphSourceErrorCode::NodeOutOfBounds,
        }
    }
}

/// Machine-readable error codes for [`GraphSourceError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphSourceErrorCode {
    /// Requested node was outside the source's index range.
    NodeOutOfBounds,
}

impl GraphSourceErrorCode {
    /// Returns the symbolic identifier for logging and diagnostics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NodeOutOfBounds => "GRAPH_SOURCE_NODE_OUT_OF_BOUNDS",
        }
    }
}

/// Error type produced when constructing or running the sampler.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SamplerError {
    /// The requested number of edges must be greater than zero.
    #[error("number_of_edges must be at least 1 (got {got})")]
    InvalidEdgeCount {
        /// The invalid edge count supplied by the caller.
        got: usize,
    },
    /// The hybridization probability must lie in `[0, 1]`.
    #[error("hybridization probability must lie in [0, 1] (got {got})")]
    InvalidProbability {
        /// The invalid probability supplied by the caller.
        got: f64,
    },
    /// The supplied graph contained no nodes or no edges.
    #[error("graph `{graph}` contains no sampleable edges")]
    EmptyGraph {
        /// Identifier for the empty graph.
        graph: Arc<str>,
    },
    /// The requested edge count exceeds the edges available in the graph.
    #[error("graph `{graph}` has {available} edges but {requested} were requested")]
    SampleExceedsGraph {
        /// Identifier for the undersized graph.
        graph: Arc<str>,
        /// Number of edges requested by the sampler configuration.
        requested: usize,
        /// Number of edges the graph actually offers.
        available: usize,
    },
    /// A [`crate::GraphSource`] operation failed while sampling.
    #[error("graph `{graph}` failed: {error}")]
    Source {
        /// Identifier for the graph that produced the error.
        graph: Arc<str>,
        #[source]
        /// Underlying graph-source error bubbled up by the sampler.
        error: GraphSourceError,
    },
}

impl SamplerError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SamplerErrorCode {
        match self {
            Self::InvalidEdgeCount { .. } => SamplerErrorCode::InvalidEdgeCount,
            Self::InvalidProbability { .. } => SamplerErrorCode::InvalidProbability,
            Self::EmptyGraph { .. } => SamplerErrorCode::EmptyGraph,
            Self::SampleExceedsGraph { .. } => SamplerErrorCode::SampleExceedsGraph,
            Self::Source { .. } => SamplerErrorCode::SourceFailure,
        }
    }

    /// Retrieve the inner [`GraphSourceErrorCode`] when the error originated
    /// in a [`crate::GraphSource`].
    #[must_use]
    pub const fn source_code(&self) -> Option<GraphSourceErrorCode> {
        match self {
            Self::Source { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}

/// Machine-readable error codes for [`SamplerError`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SamplerErrorCode {
    /// The requested number of edges must be greater than zero.
    InvalidEdgeCount,
    /// The hybridization probability must lie in `[0, 1]`.
    InvalidProbability,
    /// The supplied graph contained no nodes or no edges.
    EmptyGraph,
    /// The requested edge count exceeds the edges available in the graph.
    SampleExceedsGraph,
    /// A graph-source operation failed while sampling.
    SourceFailure,
}

impl SamplerErrorCode {
    /// Returns the symbolic identifier for logging and diagnostics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEdgeCount => "SAMPLER_INVALID_EDGE_COUNT",
            Self::InvalidProbability => "SAMPLER_INVALID_PROBABILITY",
            Self::EmptyGraph => "SAMPLER_EMPTY_GRAPH",
            Self::SampleExceedsGraph => "SAMPLER_SAMPLE_EXCEEDS_GRAPH",
            Self::SourceFailure => "SAMPLER_SOURCE_FAILURE",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, SamplerError>;
