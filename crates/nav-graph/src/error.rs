//! Graph-store error type.
//!
//! A graph that fails to load is fatal at startup: the engine never operates
//! on a partial graph, so there is no recoverable variant here.

use thiserror::Error;

/// Errors produced by `nav-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("facility graph unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("facility graph corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("invalid graph data: {0}")]
    Invalid(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
