//! Location resolution policy.
//!
//! Maps external identifiers — QR marker codes, node codes, room codes,
//! patient ids — onto graph nodes, applying the role-specific destination
//! policy: a patient looks for their provider, so their destination prefers
//! the department node over their own bed; everyone else (visitors, staff)
//! navigates to the literal room.

use nav_core::{Label, NodeId};
use nav_graph::FacilityGraph;

use crate::directory::{PatientDirectory, PatientRecord};
use crate::ResolveError;

/// Who is asking for directions.  Drives the destination policy.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Role {
    /// A patient seeking their provider: prefer the department node.
    Patient,
    /// A visitor heading to a patient's bed: resolve the literal room.
    Visitor,
    /// Staff: same literal-room policy as visitors.
    Staff,
}

/// A resolved destination: the node to route to plus the display label the
/// presentation layer should announce for it.
#[derive(Clone, Debug)]
pub struct ResolvedDestination {
    pub node: NodeId,
    pub label: Label,
}

/// Resolve a starting locator: a scanned QR marker first, then a bare node
/// code.
pub fn resolve_origin(graph: &FacilityGraph, locator: &str) -> Result<(NodeId, Label), ResolveError> {
    if let Some(qr) = graph.qr_location(locator) {
        return Ok((qr.node, qr.label.clone()));
    }
    if let Some(node) = graph.node_by_code(locator) {
        return Ok((node, graph.label(node).clone()));
    }
    Err(ResolveError::UnknownLocation(locator.to_owned()))
}

/// Resolve a destination query under the given role.
///
/// Match order: QR marker, patient id (role policy applies), room code,
/// department keyword.  A query that matches nothing is
/// [`ResolveError::DestinationNotFound`] — never a silent default node.
pub fn resolve_destination(
    graph: &FacilityGraph,
    directory: &dyn PatientDirectory,
    query: &str,
    role: Role,
) -> Result<ResolvedDestination, ResolveError> {
    if let Some(qr) = graph.qr_location(query) {
        return Ok(ResolvedDestination { node: qr.node, label: qr.label.clone() });
    }

    if let Some(patient) = directory.patient(query) {
        return destination_for_patient(graph, patient, role);
    }

    if let Some(node) = graph.room_node(query) {
        return Ok(ResolvedDestination { node, label: graph.label(node).clone() });
    }

    if let Some(node) = department_node(graph, query) {
        return Ok(ResolvedDestination { node, label: graph.label(node).clone() });
    }

    Err(ResolveError::DestinationNotFound(query.to_owned()))
}

/// Apply the role policy to a known patient record.
///
/// `Role::Patient` prefers the department node and falls back to the room;
/// other roles go straight to the room.  Failure of both lookups surfaces as
/// `DestinationNotFound` for the patient's room.
pub fn destination_for_patient(
    graph: &FacilityGraph,
    patient: &PatientRecord,
    role: Role,
) -> Result<ResolvedDestination, ResolveError> {
    if role == Role::Patient {
        if let Some(node) = department_node(graph, &patient.department) {
            let label = Label::new(
                format!("{} (Department: {})", patient.doctor.primary, patient.department),
                format!("{} (Department: {})", patient.doctor.secondary, patient.department),
            );
            return Ok(ResolvedDestination { node, label });
        }
    }

    if let Some(node) = graph.room_node(&patient.room) {
        let label = Label::new(
            format!("Room {} — {}", patient.room, patient.ward.primary),
            format!("Room {} — {}", patient.room, patient.ward.secondary),
        );
        return Ok(ResolvedDestination { node, label });
    }

    Err(ResolveError::DestinationNotFound(patient.room.clone()))
}

/// First node whose code or primary label contains `department`
/// (case-insensitive).  Node order is the graph's declaration order, so the
/// match is deterministic.
fn department_node(graph: &FacilityGraph, department: &str) -> Option<NodeId> {
    let needle = department.to_lowercase();
    if needle.is_empty() {
        return None;
    }
    graph.nodes().find(|&n| {
        graph.code(n).to_lowercase().contains(&needle)
            || graph.label(n).primary.to_lowercase().contains(&needle)
    })
}
