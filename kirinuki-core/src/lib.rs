//! Kirinuki core library.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod edge;
mod error;
mod sampler;
mod source;
mod subgraph;
mod validate;

pub use crate::{
    builder::SamplerBuilder,
    edge::Edge,
    error::{GraphSourceError, GraphSourceErrorCode, Result, SamplerError, SamplerErrorCode},
    sampler::HybridNodeEdgeSampler,
    source::GraphSource,
    subgraph::Subgraph,
};
