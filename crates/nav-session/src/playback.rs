//! Tick-driven auto playback.
//!
//! Auto mode is a logical clock, not an animation loop: the session stores
//! the tick at which playback was anchored, and position is a pure function
//! of `(anchor, now, pace)`.  The rendering layer asks "which segment is
//! active and what fraction of it has elapsed" and does its own frame
//! interpolation; re-anchoring (mode switch, new route) is how playback is
//! cancelled and restarted.

use nav_core::Tick;

/// Fixed playback pace: how many ticks crossing one route segment takes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AutoPace {
    pub ticks_per_segment: u32,
}

impl AutoPace {
    pub fn new(ticks_per_segment: u32) -> Self {
        // A zero pace would make every position query land on the end.
        Self { ticks_per_segment: ticks_per_segment.max(1) }
    }

    /// Playback position at `now` for a route with `segment_count` segments
    /// (`segment_count == steps - 1`, zero for a single-node route).
    pub fn position(self, anchor: Tick, now: Tick, segment_count: usize) -> PlaybackPosition {
        if segment_count == 0 {
            return PlaybackPosition { segment: 0, fraction: 1.0, finished: true };
        }

        let per = self.ticks_per_segment as u64;
        let elapsed = now.since(anchor);
        let segment = (elapsed / per) as usize;

        if segment >= segment_count {
            // Clamp at the end — playback never wraps around.
            return PlaybackPosition {
                segment: segment_count - 1,
                fraction: 1.0,
                finished: true,
            };
        }

        PlaybackPosition {
            segment,
            fraction: (elapsed % per) as f32 / per as f32,
            finished: false,
        }
    }
}

impl Default for AutoPace {
    /// Ten ticks per segment — at a 100 ms presentation tick this walks one
    /// corridor segment per second.
    fn default() -> Self {
        Self { ticks_per_segment: 10 }
    }
}

/// Where auto playback stands on the route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlaybackPosition {
    /// Index of the active segment: the dot is between route steps
    /// `segment` and `segment + 1`.
    pub segment: usize,
    /// Fraction of the active segment already covered, in `[0.0, 1.0]`.
    pub fraction: f32,
    /// `true` once the whole route has been covered.
    pub finished: bool,
}

impl PlaybackPosition {
    /// The route node index playback has most recently reached.
    #[inline]
    pub fn node_index(self, segment_count: usize) -> usize {
        if self.finished { segment_count } else { self.segment }
    }
}
