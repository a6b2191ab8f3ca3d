//! Floor-plan coordinate type.
//!
//! `MapPoint` uses percentage-normalized `f32` coordinates: `(0, 0)` is the
//! top-left corner of a floor plan, `(100, 100)` the bottom-right.  Positions
//! exist for rendering and live-position snapping only — path weights come
//! from declared edge costs, never from coordinate distance.

use serde::{Deserialize, Serialize};

/// A percentage-normalized 2-D position on one floor of the facility.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance in percent units.  Valid only between points on the
    /// same floor; cross-floor distance has no geometric meaning here.
    pub fn distance(self, other: MapPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
