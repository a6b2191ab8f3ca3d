//! `nav-engine` — the top-level navigation facade.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`directory`] | `PatientDirectory` trait, `PatientRecord`, `StaticDirectory` |
//! | [`resolve`]   | `Role`, origin/destination resolution policy             |
//! | [`engine`]    | `NavEngine`, `RoutePlan`, `NavigationPlan`               |
//! | [`error`]     | `ResolveError`, `EngineError`, `EngineResult<T>`         |
//!
//! # Request model
//!
//! The engine is a pure computation facade: it holds an `Arc`-shared
//! immutable graph and a stateless router, so any number of callers can
//! resolve and route concurrently.  Mutable per-user state lives entirely in
//! the [`NavigationSession`][nav_session::NavigationSession] a plan produces.

pub mod directory;
pub mod engine;
pub mod error;
pub mod resolve;

#[cfg(test)]
mod tests;

pub use directory::{PatientDirectory, PatientRecord, StaticDirectory};
pub use engine::{NavEngine, NavigationPlan, RoutePlan, Waypoint};
pub use error::{EngineError, EngineResult, ResolveError};
pub use resolve::{destination_for_patient, resolve_destination, resolve_origin, ResolvedDestination, Role};
