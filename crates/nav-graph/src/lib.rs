//! `nav-graph` — the facility graph store.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `FacilityGraph` (CSR + R-tree), `FacilityGraphBuilder`    |
//! | [`loader`] | `load_json` / `load_reader` — JSON graph files            |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |
//!
//! # Immutability contract
//!
//! A `FacilityGraph` never changes after `build()`.  Routing requests share
//! one loaded graph (typically behind an `Arc`) with no locking; every
//! shortest-path run builds its own distance arrays on the side.

pub mod error;
pub mod graph;
pub mod loader;


pub use error::{GraphError, GraphResult};
pub use graph::{FacilityGraph, FacilityGraphBuilder, QrLocation};
pub use loader::{load_json, load_reader};
