//! Facility graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing
//! adjacency.  Given a `NodeId n`, its outgoing entries occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_weight`) are sorted by
//! source node and indexed by `EdgeId`.  Iteration over a node's neighbours
//! is therefore a contiguous memory scan — ideal for Dijkstra's inner loop.
//!
//! Every declared link is inserted **in both directions**: corridors and
//! stairwells are walkable both ways regardless of how the authoring tool
//! listed the endpoints.  Parallel links between the same pair of nodes are
//! kept as independent entries.
//!
//! # Lookup indexes
//!
//! Three string-keyed `FxHashMap`s translate external identifiers into
//! `NodeId`s: node codes, QR marker codes, and room codes.  An R-tree (via
//! `rstar`) over `(x, y)` supports nearest-node queries for live-position
//! snapping; entries carry their floor so a query never snaps across levels.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use nav_core::{EdgeId, Label, MapPoint, NodeId};

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[x, y]` point with the
/// associated `NodeId` and floor.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f32; 2],
    id: NodeId,
    floor: i16,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in percent-coordinate space.
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── QR location ───────────────────────────────────────────────────────────────

/// A physical QR marker resolved to a graph node.
#[derive(Clone, Debug)]
pub struct QrLocation {
    pub node: NodeId,
    pub label: Label,
}

// ── FacilityGraph ─────────────────────────────────────────────────────────────

/// Immutable facility graph in CSR format plus external-identifier indexes.
///
/// Node arrays are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`FacilityGraphBuilder`] or the JSON loader.
#[derive(Debug)]
pub struct FacilityGraph {
    // ── Node data (indexed by NodeId) ─────────────────────────────────────
    /// External node code, e.g. `"icu_1"`.
    pub node_code: Vec<String>,

    /// Bilingual display label of each node.
    pub node_label: Vec<Label>,

    /// Percentage-normalized floor-plan position.  Rendering and live
    /// snapping only — never a path weight.
    pub node_pos: Vec<MapPoint>,

    /// Floor number of each node.  A transition between different floors is
    /// always a vertical-transport hop (lift or stairs).
    pub node_floor: Vec<i16>,

    /// `true` for named facilities (departments, wards); `false` for
    /// junctions and corridor waypoints.
    pub node_is_facility: Vec<bool>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing entries of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each entry.  Redundant with CSR but required for
    /// route reconstruction (trace `prev_edge` back to its source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each entry.
    pub edge_to: Vec<NodeId>,

    /// Non-negative traversal cost of each entry.
    pub edge_weight: Vec<f32>,

    // ── External-identifier indexes ───────────────────────────────────────
    code_index: FxHashMap<String, NodeId>,
    qr_index: FxHashMap<String, QrLocation>,
    room_index: FxHashMap<String, NodeId>,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<NodeEntry>,
}

impl FacilityGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_code.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_code.is_empty()
    }

    /// `true` if `node` is a valid index into this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count()
    }

    /// Iterator over every `NodeId` in the graph.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).map(|i| NodeId(i as u32))
    }

    // ── Node accessors ────────────────────────────────────────────────────

    #[inline]
    pub fn code(&self, node: NodeId) -> &str {
        &self.node_code[node.index()]
    }

    #[inline]
    pub fn label(&self, node: NodeId) -> &Label {
        &self.node_label[node.index()]
    }

    #[inline]
    pub fn pos(&self, node: NodeId) -> MapPoint {
        self.node_pos[node.index()]
    }

    #[inline]
    pub fn floor(&self, node: NodeId) -> i16 {
        self.node_floor[node.index()]
    }

    #[inline]
    pub fn is_facility(&self, node: NodeId) -> bool {
        self.node_is_facility[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing entries from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node`.
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// `true` if some adjacency entry connects `a` directly to `b`.
    pub fn connected(&self, a: NodeId, b: NodeId) -> bool {
        self.out_edges(a).any(|e| self.edge_to[e.index()] == b)
    }

    // ── External-identifier lookups ───────────────────────────────────────

    /// Resolve an external node code to its `NodeId`.
    pub fn node_by_code(&self, code: &str) -> Option<NodeId> {
        self.code_index.get(code).copied()
    }

    /// Resolve a scanned QR marker code.
    pub fn qr_location(&self, code: &str) -> Option<&QrLocation> {
        self.qr_index.get(code)
    }

    /// Resolve a room code to the node serving that room.
    pub fn room_node(&self, room: &str) -> Option<NodeId> {
        self.room_index.get(room).copied()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest node to `pos` **on the given floor**.
    ///
    /// Returns `None` if the graph has no nodes on that floor.
    pub fn nearest_node_on_floor(&self, pos: MapPoint, floor: i16) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor_iter(&[pos.x, pos.y])
            .find(|e| e.floor == floor)
            .map(|e| e.id)
    }
}

// ── FacilityGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`FacilityGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes, links, and index registrations in any order.
/// `build()` sorts adjacency entries by source node, constructs the CSR
/// arrays, interns node codes, and bulk-loads the R-tree.
///
/// The builder itself is infallible; structural validation (duplicate codes,
/// unknown endpoints, self-loops, negative weights) belongs to the JSON
/// loader, which checks before it ever touches the builder.
///
/// # Example
///
/// ```
/// use nav_core::{Label, MapPoint};
/// use nav_graph::FacilityGraphBuilder;
///
/// let mut b = FacilityGraphBuilder::new();
/// let lobby = b.add_node("lobby", Label::monolingual("Lobby"), MapPoint::new(10.0, 50.0), 0, true);
/// let ward = b.add_node("ward_a", Label::new("Ward A", "வார்டு A"), MapPoint::new(40.0, 50.0), 0, true);
/// b.add_link(lobby, ward, 5.0);
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2); // bidirectional
/// ```
pub struct FacilityGraphBuilder {
    codes: Vec<String>,
    labels: Vec<Label>,
    positions: Vec<MapPoint>,
    floors: Vec<i16>,
    facility_flags: Vec<bool>,
    raw_edges: Vec<RawEdge>,
    qr: Vec<(String, NodeId, Label)>,
    rooms: Vec<(String, NodeId)>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    weight: f32,
}

impl FacilityGraphBuilder {
    pub fn new() -> Self {
        Self {
            codes: Vec::new(),
            labels: Vec::new(),
            positions: Vec::new(),
            floors: Vec::new(),
            facility_flags: Vec::new(),
            raw_edges: Vec::new(),
            qr: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and links.
    pub fn with_capacity(nodes: usize, links: usize) -> Self {
        Self {
            codes: Vec::with_capacity(nodes),
            labels: Vec::with_capacity(nodes),
            positions: Vec::with_capacity(nodes),
            floors: Vec::with_capacity(nodes),
            facility_flags: Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(links * 2),
            qr: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(
        &mut self,
        code: impl Into<String>,
        label: Label,
        pos: MapPoint,
        floor: i16,
        is_facility: bool,
    ) -> NodeId {
        let id = NodeId(self.codes.len() as u32);
        self.codes.push(code.into());
        self.labels.push(label);
        self.positions.push(pos);
        self.floors.push(floor);
        self.facility_flags.push(is_facility);
        id
    }

    /// Add a walkable link between `a` and `b` with the given cost.
    ///
    /// The link is inserted in both directions at the same cost.
    pub fn add_link(&mut self, a: NodeId, b: NodeId, weight: f32) {
        self.raw_edges.push(RawEdge { from: a, to: b, weight });
        self.raw_edges.push(RawEdge { from: b, to: a, weight });
    }

    /// Register a QR marker code resolving to `node`.
    pub fn register_qr(&mut self, code: impl Into<String>, node: NodeId, label: Label) {
        self.qr.push((code.into(), node, label));
    }

    /// Register a room code resolving to `node`.
    pub fn register_room(&mut self, room: impl Into<String>, node: NodeId) {
        self.rooms.push((room.into(), node));
    }

    pub fn node_count(&self) -> usize {
        self.codes.len()
    }

    /// Consume the builder and produce a [`FacilityGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort + O(N log N) for the
    /// R-tree bulk load.
    pub fn build(self) -> FacilityGraph {
        let node_count = self.codes.len();
        let edge_count = self.raw_edges.len();

        // Sort adjacency entries by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f32> = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Intern node codes.
        let mut code_index =
            FxHashMap::with_capacity_and_hasher(node_count, Default::default());
        for (i, code) in self.codes.iter().enumerate() {
            code_index.insert(code.clone(), NodeId(i as u32));
        }

        let qr_index = self
            .qr
            .into_iter()
            .map(|(code, node, label)| (code, QrLocation { node, label }))
            .collect();
        let room_index = self.rooms.into_iter().collect();

        // Bulk-load the R-tree for O(N log N) construction.
        let entries: Vec<NodeEntry> = self
            .positions
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: [pos.x, pos.y],
                id: NodeId(i as u32),
                floor: self.floors[i],
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        FacilityGraph {
            node_code: self.codes,
            node_label: self.labels,
            node_pos: self.positions,
            node_floor: self.floors,
            node_is_facility: self.facility_flags,
            node_out_start,
            edge_from,
            edge_to,
            edge_weight,
            code_index,
            qr_index,
            room_index,
            spatial_idx,
        }
    }
}

impl Default for FacilityGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
