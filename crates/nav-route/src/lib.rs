//! `nav-route` — shortest-path routing over the facility graph.
//!
//! # Crate layout
//!
//! | Module     | Contents                                         |
//! |------------|--------------------------------------------------|
//! | [`route`]  | `Route`, `RouteStep` — annotated path output     |
//! | [`router`] | `Router` trait, `DijkstraRouter`                 |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                   |
//!
//! # Determinism
//!
//! For a fixed graph and fixed link declaration order, routing is fully
//! reproducible: heap entries carry the node id as a secondary key, so ties
//! on tentative distance always settle the lowest id first.

pub mod error;
pub mod route;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use route::{Route, RouteStep};
pub use router::{DijkstraRouter, Router};
