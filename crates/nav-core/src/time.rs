//! Logical playback clock.
//!
//! Auto-mode progression is driven by a monotonically increasing `Tick`
//! counter rather than wall time or a rendering loop.  The session core only
//! answers "which path segment is active at tick T and what fraction of it
//! has elapsed"; mapping ticks to real milliseconds (or animation frames) is
//! the presentation layer's business.  Integer ticks keep all progression
//! arithmetic exact.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An absolute logical tick counter.
///
/// Stored as `u64` so overflow is a non-issue at any conceivable tick rate.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(Serialize, Deserialize)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero if the
    /// caller hands in a later anchor.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
