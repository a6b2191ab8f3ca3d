//! JSON graph loader.
//!
//! # File format
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "lobby", "label": "Main Lobby", "labelAlt": "முதன்மை வரவேற்பு",
//!       "x": 10.0, "y": 50.0, "floor": 0, "isFacility": true }
//!   ],
//!   "edges": [
//!     { "from": "lobby", "to": "corridor_1", "weight": 5 }
//!   ],
//!   "qrLocations": {
//!     "QR_ENTRANCE": { "nodeId": "lobby", "label": "Main Entrance" }
//!   },
//!   "roomToNode": {
//!     "G05": "room_g05"
//!   }
//! }
//! ```
//!
//! `labelAlt` and `isFacility` may be omitted; `labelAlt` falls back to the
//! primary label.  Edge direction in the file is irrelevant — every edge is
//! loaded as a bidirectional link.
//!
//! # Validation
//!
//! The loader rejects graphs it cannot serve rather than degrading: duplicate
//! node ids, edges naming unknown nodes, self-loops, negative weights, and
//! QR/room entries pointing at unknown nodes all fail with
//! [`GraphError::Invalid`].  A missing file is [`GraphError::Unavailable`];
//! malformed JSON is [`GraphError::Corrupt`].

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use nav_core::{Label, MapPoint};

use crate::{FacilityGraph, FacilityGraphBuilder, GraphError, GraphResult};

// ── Raw JSON records ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGraph {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
    #[serde(default)]
    qr_locations: HashMap<String, RawQrLocation>,
    #[serde(default)]
    room_to_node: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    label: String,
    #[serde(default)]
    label_alt: String,
    x: f32,
    y: f32,
    floor: i16,
    #[serde(default)]
    is_facility: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEdge {
    from: String,
    to: String,
    weight: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQrLocation {
    node_id: String,
    label: String,
    #[serde(default)]
    label_alt: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a facility graph from a JSON file.
pub fn load_json(path: &Path) -> GraphResult<FacilityGraph> {
    let file = std::fs::File::open(path).map_err(GraphError::Unavailable)?;
    load_reader(std::io::BufReader::new(file))
}

/// Like [`load_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading an embedded
/// graph asset.
pub fn load_reader<R: Read>(reader: R) -> GraphResult<FacilityGraph> {
    let raw: RawGraph = serde_json::from_reader(reader)?;
    build_validated(raw)
}

// ── Validation & construction ─────────────────────────────────────────────────

fn build_validated(raw: RawGraph) -> GraphResult<FacilityGraph> {
    let mut b = FacilityGraphBuilder::with_capacity(raw.nodes.len(), raw.edges.len());

    // Nodes first; the id map also detects duplicates.
    let mut ids = HashMap::with_capacity(raw.nodes.len());
    for node in raw.nodes {
        if ids.contains_key(&node.id) {
            return Err(GraphError::Invalid(format!("duplicate node id {:?}", node.id)));
        }
        let id = b.add_node(
            node.id.clone(),
            Label::new(node.label, node.label_alt),
            MapPoint::new(node.x, node.y),
            node.floor,
            node.is_facility,
        );
        ids.insert(node.id, id);
    }

    for edge in raw.edges {
        let from = *ids.get(&edge.from).ok_or_else(|| {
            GraphError::Invalid(format!("edge references unknown node {:?}", edge.from))
        })?;
        let to = *ids.get(&edge.to).ok_or_else(|| {
            GraphError::Invalid(format!("edge references unknown node {:?}", edge.to))
        })?;
        if from == to {
            return Err(GraphError::Invalid(format!("self-loop on node {:?}", edge.from)));
        }
        if edge.weight < 0.0 || !edge.weight.is_finite() {
            return Err(GraphError::Invalid(format!(
                "edge {:?} -> {:?} has invalid weight {}",
                edge.from, edge.to, edge.weight
            )));
        }
        b.add_link(from, to, edge.weight);
    }

    for (code, qr) in raw.qr_locations {
        let node = *ids.get(&qr.node_id).ok_or_else(|| {
            GraphError::Invalid(format!("QR {:?} references unknown node {:?}", code, qr.node_id))
        })?;
        b.register_qr(code, node, Label::new(qr.label, qr.label_alt));
    }

    for (room, node_id) in raw.room_to_node {
        let node = *ids.get(&node_id).ok_or_else(|| {
            GraphError::Invalid(format!("room {:?} references unknown node {:?}", room, node_id))
        })?;
        b.register_room(room, node);
    }

    Ok(b.build())
}
