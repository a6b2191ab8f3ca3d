//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The engine calls routing via the [`Router`] trait, so applications can
//! swap in custom implementations (A*, precomputed tables) without touching
//! anything else.  The default [`DijkstraRouter`] is sufficient for
//! facility-scale graphs.
//!
//! # Cost units
//!
//! Edge weights are non-negative `f32` distance units straight from the
//! graph data; `total_distance` is their literal sum, never a hop count.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nav_core::{EdgeId, NodeId};
use nav_graph::FacilityGraph;

use crate::route::{Route, RouteStep};
use crate::{RouteError, RouteResult};

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: the engine shares one router across
/// concurrent routing requests, each of which allocates its own scratch
/// state.
pub trait Router: Send + Sync {
    /// Compute the cheapest route from `from` to `to`.
    ///
    /// `from == to` yields a single-step route with `total_distance == 0.0`
    /// rather than an error.
    fn route(&self, graph: &FacilityGraph, from: NodeId, to: NodeId) -> RouteResult<Route>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard binary-heap Dijkstra over the CSR facility graph.
///
/// Ties on tentative distance settle the lowest `NodeId` first (the heap key
/// is `(cost, node)`), so results are reproducible for a fixed graph and
/// fixed link declaration order.
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &FacilityGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
        shortest_path(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// `f32` cost with a total order, usable as a heap key.
///
/// Costs are sums of validated non-negative finite weights, so `total_cmp`
/// agrees with the usual numeric order here.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Cost(f32);

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

fn shortest_path(graph: &FacilityGraph, from: NodeId, to: NodeId) -> RouteResult<Route> {
    // Absent endpoints are a distinct failure from an unreachable pair and
    // must be caught before the relaxation loop.
    if !graph.contains(from) {
        return Err(RouteError::UnknownNode(from));
    }
    if !graph.contains(to) {
        return Err(RouteError::UnknownNode(to));
    }
    if from == to {
        return Ok(annotate(graph, vec![from], 0.0));
    }

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f32::INFINITY; n];
    // prev_edge[v] = adjacency entry that reached v; INVALID for unreached.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(Cost, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(0.0), from)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if node == to {
            return Ok(reconstruct(graph, &prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost + graph.edge_weight[edge.index()];

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev_edge[neighbor.index()] = edge;
                heap.push(Reverse((Cost(new_cost), neighbor)));
            }
        }
    }

    Err(RouteError::NoRoute { from, to })
}

fn reconstruct(
    graph: &FacilityGraph,
    prev_edge: &[EdgeId],
    from: NodeId,
    to: NodeId,
    total: f32,
) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    debug_assert_eq!(*nodes.last().unwrap(), from);
    nodes.reverse();
    annotate(graph, nodes, total)
}

/// Attach code/label/position/floor metadata to a raw node sequence.
fn annotate(graph: &FacilityGraph, nodes: Vec<NodeId>, total: f32) -> Route {
    let steps = nodes
        .into_iter()
        .enumerate()
        .map(|(step_index, node)| RouteStep {
            node,
            code: graph.code(node).to_owned(),
            label: graph.label(node).clone(),
            pos: graph.pos(node),
            floor: graph.floor(node),
            step_index,
        })
        .collect();

    Route { steps, total_distance: total }
}
