//! Annotated routing output.

use serde::Serialize;

use nav_core::{Label, MapPoint, NodeId};

/// One node of a computed route, annotated with everything the presentation
/// layer needs to render it without further graph lookups.
#[derive(Clone, Debug, Serialize)]
pub struct RouteStep {
    /// Graph node index.
    pub node: NodeId,
    /// External node code, e.g. `"corridor_1"`.
    pub code: String,
    /// Bilingual display label of the node.
    pub label: Label,
    /// Floor-plan position for rendering and live snapping.
    pub pos: MapPoint,
    /// Floor the node is on.
    pub floor: i16,
    /// Position of this step in the route, starting at 0.
    pub step_index: usize,
}

/// The result of a routing query: the literal node sequence from start to
/// destination inclusive, plus the summed edge weights.
///
/// Invariants: `steps` is never empty, `steps[0]` is the start,
/// `steps[last]` the destination, and every consecutive pair is connected by
/// a real graph edge.  Immutable once computed.
#[derive(Clone, Debug, Serialize)]
pub struct Route {
    /// Nodes to visit in order, start and destination included.
    pub steps: Vec<RouteStep>,
    /// Sum of traversed edge weights.  `0.0` for a single-node route.
    pub total_distance: f32,
}

impl Route {
    /// Number of nodes on the route (hop count + 1).
    #[inline]
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// `true` if start and destination are the same node.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.steps.len() == 1
    }

    /// First node of the route.
    pub fn start(&self) -> &RouteStep {
        &self.steps[0]
    }

    /// Final node of the route.
    pub fn destination(&self) -> &RouteStep {
        &self.steps[self.steps.len() - 1]
    }

    /// Index of the last step — the clamp bound for session advancement.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }
}
