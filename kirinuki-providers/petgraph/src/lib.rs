//! Petgraph adapters for kirinuki graph sampling.
//!
//! Wraps [`petgraph::graph::UnGraph`] values as sampling sources and
//! converts sampled subgraphs back into petgraph form.

mod convert;
mod source;

pub use convert::to_ungraph;
pub use source::UnGraphSource;
