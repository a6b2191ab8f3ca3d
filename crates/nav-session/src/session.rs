//! The navigation session state machine.

use nav_core::{Label, MapPoint, Tick};
use nav_guide::reached_announcement;
use nav_route::{Route, RouteStep};

use crate::playback::{AutoPace, PlaybackPosition};
use crate::telemetry::TelemetryRecord;
use crate::{SessionError, SessionResult};

/// How the session cursor progresses along the route.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Mode {
    /// Time-driven: a logical tick clock walks the route at a fixed pace.
    #[default]
    Auto,
    /// Event-driven: explicit advance/retreat, one node at a time.
    Manual,
    /// Position-driven: external position reports snap onto the route.
    Live,
}

/// Lifecycle phase of the current route.  "Idle" is the absence of a
/// session; a new route request builds a fresh session rather than resuming
/// a stale one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Route computed, cursor still at the start, nothing reached yet.
    Routed,
    /// At least one progression event has been applied.
    Advancing,
    /// Cursor sits on the final node.  Terminal for this route.
    Arrived,
}

/// Snapshot of the session surface exposed to the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: usize,
    pub mode: Mode,
    pub phase: Phase,
    pub arrived: bool,
}

/// A per-user navigation session.
///
/// Owns one computed route plus its voice steps and tracks the cursor, the
/// active mode, and the telemetry log.  Single-owner mutable state: all
/// mutation goes through `&mut self`, and callers that share a session
/// across tasks wrap it in their own lock.
pub struct NavigationSession {
    route: Route,
    voice_steps: Vec<String>,
    mode: Mode,
    current: usize,
    moved: bool,
    pace: AutoPace,
    /// Tick at which auto playback was anchored.  `None` means playback is
    /// not running; dropping the anchor cancels an in-flight playback.
    auto_anchor: Option<Tick>,
    /// Maximum snap distance (percent units) for live position reports.
    snap_radius: f32,
    telemetry: Vec<TelemetryRecord>,
}

/// Default live-snap radius in percent units.  A report further than this
/// from every route node on its floor is discarded as off-route noise.
const DEFAULT_SNAP_RADIUS: f32 = 8.0;

impl NavigationSession {
    /// Create a session over a computed route.
    ///
    /// Fails with [`SessionError::NoActiveRoute`] if `route` carries no
    /// steps — a session cannot exist without a route.
    pub fn new(route: Route, voice_steps: Vec<String>) -> SessionResult<Self> {
        if route.steps.is_empty() {
            return Err(SessionError::NoActiveRoute);
        }
        Ok(Self {
            route,
            voice_steps,
            mode: Mode::default(),
            current: 0,
            moved: false,
            pace: AutoPace::default(),
            auto_anchor: None,
            snap_radius: DEFAULT_SNAP_RADIUS,
            telemetry: Vec::new(),
        })
    }

    /// Override the auto-playback pace.
    pub fn with_pace(mut self, pace: AutoPace) -> Self {
        self.pace = pace;
        self
    }

    /// Override the live-snap radius.
    pub fn with_snap_radius(mut self, radius: f32) -> Self {
        self.snap_radius = radius;
        self
    }

    // ── Read surface ──────────────────────────────────────────────────────

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The route step the cursor currently sits on.
    pub fn current_step(&self) -> &RouteStep {
        &self.route.steps[self.current]
    }

    #[inline]
    pub fn arrived(&self) -> bool {
        self.current == self.route.last_index()
    }

    pub fn phase(&self) -> Phase {
        if self.arrived() {
            Phase::Arrived
        } else if self.moved {
            Phase::Advancing
        } else {
            Phase::Routed
        }
    }

    /// Consistent `(index, mode, phase)` snapshot for the presentation layer.
    pub fn state(&self) -> SessionState {
        SessionState {
            current_index: self.current,
            mode: self.mode,
            phase: self.phase(),
            arrived: self.arrived(),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn voice_steps(&self) -> &[String] {
        &self.voice_steps
    }

    pub fn telemetry(&self) -> &[TelemetryRecord] {
        &self.telemetry
    }

    // ── Mode control ──────────────────────────────────────────────────────

    /// Switch progression mode.
    ///
    /// Dropping the playback anchor here is what cancels an in-flight auto
    /// run; re-entering auto re-anchors on the next [`tick`](Self::tick), so
    /// two playbacks can never overlap.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.auto_anchor = None;
    }

    // ── Auto progression ──────────────────────────────────────────────────

    /// Advance auto playback to `now`.
    ///
    /// No-op outside auto mode.  The first call after entering auto anchors
    /// the clock.  Returns one announcement per newly reached node, in
    /// order.  The cursor only ever moves forward here; it clamps at the
    /// final node and stays there.
    pub fn tick(&mut self, now: Tick) -> Vec<Label> {
        if self.mode != Mode::Auto {
            return Vec::new();
        }
        let anchor = *self.auto_anchor.get_or_insert(now);

        let segment_count = self.route.last_index();
        let pos = self.pace.position(anchor, now, segment_count);
        let target = pos.node_index(segment_count);

        let mut announcements = Vec::new();
        while self.current < target {
            let next = self.current + 1;
            announcements.push(self.arrive_at(next, now));
        }
        announcements
    }

    /// Where playback stands at `now`, for rendering.
    ///
    /// In manual and live modes the position is simply the current node with
    /// no segment fraction.
    pub fn playback_position(&self, now: Tick) -> PlaybackPosition {
        let segment_count = self.route.last_index();
        match (self.mode, self.auto_anchor) {
            (Mode::Auto, Some(anchor)) => self.pace.position(anchor, now, segment_count),
            _ => PlaybackPosition {
                segment: self.current.min(segment_count.saturating_sub(1)),
                fraction: if self.arrived() { 1.0 } else { 0.0 },
                finished: self.arrived(),
            },
        }
    }

    // ── Manual progression ────────────────────────────────────────────────

    /// Move the cursor by `delta` nodes (usually ±1), clamped to the route
    /// bounds.
    ///
    /// Overshoot past either end is expected user behaviour and is a silent
    /// no-op.  Returns the spoken announcement when a new node was reached.
    pub fn advance(&mut self, delta: i32, now: Tick) -> Option<Label> {
        let last = self.route.last_index() as i64;
        let target = (self.current as i64 + delta as i64).clamp(0, last) as usize;
        if target == self.current {
            return None;
        }
        Some(self.arrive_at(target, now))
    }

    // ── Live progression ──────────────────────────────────────────────────

    /// Apply an external position report.
    ///
    /// Snaps to the nearest route node on the reported floor, provided it is
    /// within the snap radius; reports that match nothing are discarded.
    /// Only the mode's latest report matters — each call fully overrides the
    /// cursor, so the caller should drop stale queued positions rather than
    /// replaying them.  No-op outside live mode.
    ///
    /// Returns the new cursor index when the report moved it.
    pub fn report_position(&mut self, pos: MapPoint, floor: i16, now: Tick) -> Option<usize> {
        if self.mode != Mode::Live {
            return None;
        }

        let nearest = self
            .route
            .steps
            .iter()
            .filter(|s| s.floor == floor)
            .map(|s| (s.step_index, s.pos.distance(pos)))
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        let (index, distance) = nearest;
        if distance > self.snap_radius || index == self.current {
            return None;
        }
        self.arrive_at(index, now);
        Some(index)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Move the cursor to `index`, record telemetry, and build the spoken
    /// announcement.  Single funnel for every mode so index, log, and phase
    /// always change together.
    fn arrive_at(&mut self, index: usize, now: Tick) -> Label {
        debug_assert!(index < self.route.steps.len());
        self.current = index;
        self.moved = true;

        let step = &self.route.steps[index];
        self.telemetry.push(TelemetryRecord {
            node: step.code.clone(),
            floor: step.floor,
            tick: now,
        });
        reached_announcement(step, index == self.route.last_index())
    }
}
