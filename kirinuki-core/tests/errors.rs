use std::sync::Arc;

use kirinuki_core::{GraphSourceError, GraphSourceErrorCode, SamplerError, SamplerErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GraphSourceError::NodeOutOfBounds { node: 0 },
    GraphSourceErrorCode::NodeOutOfBounds,
)]
fn returns_expected_graph_source_code(
    #[case] error: GraphSourceError,
    #[case] expected: GraphSourceErrorCode,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
}

#[rstest]
#[case(
    SamplerError::InvalidEdgeCount { got: 0 },
    SamplerErrorCode::InvalidEdgeCount,
    None,
)]
#[case(
    SamplerError::InvalidProbability { got: 1.5 },
    SamplerErrorCode::InvalidProbability,
    None,
)]
#[case(
    SamplerError::EmptyGraph { graph: Arc::from("empty") },
    SamplerErrorCode::EmptyGraph,
    None,
)]
#[case(
    SamplerError::SampleExceedsGraph {
        graph: Arc::from("small"),
        requested: 9,
        available: 3,
    },
    SamplerErrorCode::SampleExceedsGraph,
    None,
)]
#[case(
    SamplerError::Source {
        graph: Arc::from("source"),
        error: GraphSourceError::NodeOutOfBounds { node: 1 },
    },
    SamplerErrorCode::SourceFailure,
    Some(GraphSourceErrorCode::NodeOutOfBounds),
)]
fn returns_expected_sampler_code(
    #[case] error: SamplerError,
    #[case] expected: SamplerErrorCode,
    #[case] source_code: Option<GraphSourceErrorCode>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), expected.as_str());
    assert_eq!(error.source_code(), source_code);
}

#[test]
fn graph_source_error_display_includes_node() {
    let err = GraphSourceError::NodeOutOfBounds { node: 5 };
    assert_eq!(format!("{err}"), "node 5 is out of bounds");
}

#[test]
fn sampler_error_display_names_graph() {
    let err = SamplerError::SampleExceedsGraph {
        graph: Arc::from("small"),
        requested: 9,
        available: 3,
    };
    assert_eq!(
        format!("{err}"),
        "graph `small` has 3 edges but 9 were requested"
    );
}

#[test]
fn sampler_error_source_includes_graph_name() {
    let inner = GraphSourceError::NodeOutOfBounds { node: 2 };
    let err = SamplerError::Source {
        graph: Arc::from("wrapped"),
        error: inner.clone(),
    };
    assert!(matches!(
        err,
        SamplerError::Source { ref graph, ref error }
            if graph.as_ref() == "wrapped" && error == &inner
    ));
    assert!(format!("{err}").contains("wrapped"));
}
