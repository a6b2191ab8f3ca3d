//! `nav-session` — per-user navigation session state machine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`session`]   | `NavigationSession`, `Mode`, `Phase`, `SessionState`  |
//! | [`playback`]  | `AutoPace`, `PlaybackPosition` — tick-driven playback |
//! | [`telemetry`] | `TelemetryRecord`, CSV export                         |
//! | [`error`]     | `SessionError`, `SessionResult<T>`                    |
//!
//! # Progression model
//!
//! A session owns one computed route and a cursor (`current_index`) into it.
//! Three mutually exclusive modes decide how the cursor moves:
//!
//! - **Auto** — a logical tick clock interpolates along the route at a fixed
//!   pace; `tick(now)` advances the cursor to the elapsed segment and
//!   `playback_position(now)` exposes the active segment and its elapsed
//!   fraction for rendering.
//! - **Manual** — `advance(±1)` moves one node at a time, clamped to the
//!   route bounds; overshoot is a no-op, never an error.
//! - **Live** — `report_position` snaps an external position to the nearest
//!   route node on the same floor; only the latest report matters.
//!
//! One session instance exists per active user interaction.  It is plain
//! single-owner mutable state: every mutation goes through `&mut self`, so a
//! caller that needs cross-task sharing wraps the session in its own lock
//! and reads of `current_index`/`mode` can never observe a half-applied
//! transition.  Switching mode or starting a new session drops the playback
//! anchor, which is what cancels any in-flight auto progression.

pub mod error;
pub mod playback;
pub mod session;
pub mod telemetry;


pub use error::{SessionError, SessionResult};
pub use playback::{AutoPace, PlaybackPosition};
pub use session::{Mode, NavigationSession, Phase, SessionState};
pub use telemetry::{export_csv, TelemetryRecord};
