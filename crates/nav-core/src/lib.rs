//! `nav-core` — foundational types for the facility navigation engine.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and only one external one (`serde`, for the
//! derives the graph loader and telemetry export rely on).
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `NodeId`, `EdgeId`                                |
//! | [`label`] | `Label` (bilingual string pair), `Lang`           |
//! | [`point`] | `MapPoint` — percentage-normalized floor position |
//! | [`time`]  | `Tick` — logical playback clock                   |

pub mod ids;
pub mod label;
pub mod point;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{EdgeId, NodeId};
pub use label::{Label, Lang};
pub use point::MapPoint;
pub use time::Tick;
