//! Resolver and engine error types.
//!
//! Resolution failures are 404-class values reported to the caller, never
//! silently replaced by a default node.

use thiserror::Error;

use nav_route::RouteError;
use nav_session::SessionError;

/// Errors from mapping external identifiers to graph nodes.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A locator (QR code or node code) matched nothing.
    #[error("unknown location {0:?}")]
    UnknownLocation(String),

    /// Neither a department node nor a room node could be resolved.
    #[error("destination {0:?} not found")]
    DestinationNotFound(String),
}

/// Top-level engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("patient {0:?} not found")]
    PatientNotFound(String),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("routing failed: {0}")]
    Route(#[from] RouteError),

    #[error("session failed: {0}")]
    Session(#[from] SessionError),
}

pub type EngineResult<T> = Result<T, EngineError>;
