use thiserror::Error;

/// Error produced when a search can't be carried out.
///
/// Failing to reach the goal is not an error, see [crate::Outcome].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("No heuristic value for node {0}")]
    MissingHeuristic(String),

    #[error("{0} is not a node in the graph")]
    UnknownNode(String),

    #[error("No edge from {0} to {1}")]
    MissingEdge(String, String),

    #[error("Path cost overflows on reaching {0}")]
    CostOverflow(String),

    #[error("Frontier is empty")]
    EmptyFrontier,
}

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error produced when a strategy name isn't recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown search strategy: {0}")]
pub struct UnknownStrategy(pub String);
