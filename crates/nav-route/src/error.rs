//! Routing error type.
//!
//! `UnknownNode` is detected before the algorithm runs — an absent endpoint
//! is a caller mistake, distinct from a connected graph that simply has no
//! walk between two present nodes (`NoRoute`).  Neither is retried: an
//! unchanged graph cannot start succeeding.

use thiserror::Error;

use nav_core::NodeId;

/// Errors produced by `nav-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0} not present in the facility graph")]
    UnknownNode(NodeId),

    #[error("no walkable route from {from} to {to}")]
    NoRoute { from: NodeId, to: NodeId },
}

pub type RouteResult<T> = Result<T, RouteError>;
