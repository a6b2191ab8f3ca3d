//! The navigation engine facade.

use std::sync::Arc;

use serde::Serialize;

use nav_core::{Label, Lang, NodeId};
use nav_graph::FacilityGraph;
use nav_guide::voice_steps;
use nav_route::{DijkstraRouter, Route, Router};
use nav_session::{NavigationSession, SessionResult};

use crate::directory::PatientDirectory;
use crate::resolve::{destination_for_patient, resolve_origin, Role};
use crate::{EngineError, EngineResult};

// ── Plan types ────────────────────────────────────────────────────────────────

/// A resolved endpoint: node plus the label to announce for it.
#[derive(Clone, Debug, Serialize)]
pub struct Waypoint {
    pub node: NodeId,
    pub label: Label,
}

/// Output of [`NavEngine::compute_path`]: the annotated route and its
/// narration, plus both resolved endpoints.
#[derive(Clone, Debug, Serialize)]
pub struct RoutePlan {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub route: Route,
    pub voice_steps: Vec<String>,
}

impl RoutePlan {
    /// Consume the plan and start a navigation session over its route.
    pub fn start_session(self) -> SessionResult<NavigationSession> {
        NavigationSession::new(self.route, self.voice_steps)
    }
}

/// Output of [`NavEngine::navigate_to_patient`]: a full plan including the
/// spoken greeting that opens navigation.
#[derive(Clone, Debug, Serialize)]
pub struct NavigationPlan {
    pub patient_id: String,
    pub patient_name: Label,
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub route: Route,
    pub voice_steps: Vec<String>,
    /// Bilingual welcome announcement; the presentation layer speaks one
    /// variant before the first voice step.
    pub greeting: Label,
}

impl NavigationPlan {
    pub fn start_session(self) -> SessionResult<NavigationSession> {
        NavigationSession::new(self.route, self.voice_steps)
    }
}

// ── NavEngine ─────────────────────────────────────────────────────────────────

/// Stateless facade over an immutable shared graph and a pluggable router.
///
/// Cloning is cheap (the graph is `Arc`-shared); concurrent requests need no
/// synchronization because each routing call allocates its own scratch
/// state.  All per-user mutable state lives in the sessions the plans
/// produce.
pub struct NavEngine<R: Router = DijkstraRouter> {
    graph: Arc<FacilityGraph>,
    router: R,
}

impl NavEngine<DijkstraRouter> {
    pub fn new(graph: Arc<FacilityGraph>) -> Self {
        Self { graph, router: DijkstraRouter }
    }
}

impl<R: Router> NavEngine<R> {
    /// Use a custom routing algorithm.
    pub fn with_router(graph: Arc<FacilityGraph>, router: R) -> Self {
        Self { graph, router }
    }

    pub fn graph(&self) -> &FacilityGraph {
        &self.graph
    }

    /// Compute a route between two raw locators (QR codes or node codes),
    /// narrated in `lang`.
    pub fn compute_path(&self, start: &str, end: &str, lang: Lang) -> EngineResult<RoutePlan> {
        let (from, origin_label) = resolve_origin(&self.graph, start)?;
        let (to, destination_label) = resolve_origin(&self.graph, end)?;

        let route = self.router.route(&self.graph, from, to)?;
        let steps = voice_steps(&route, lang);

        Ok(RoutePlan {
            origin: Waypoint { node: from, label: origin_label },
            destination: Waypoint { node: to, label: destination_label },
            route,
            voice_steps: steps,
        })
    }

    /// Full patient navigation: look up the patient, resolve the scanned QR
    /// start, apply the role destination policy, route, narrate, and build
    /// the greeting.
    pub fn navigate_to_patient(
        &self,
        directory: &dyn PatientDirectory,
        patient_id: &str,
        qr_code: &str,
        role: Role,
        lang: Lang,
    ) -> EngineResult<NavigationPlan> {
        let patient = directory
            .patient(patient_id)
            .ok_or_else(|| EngineError::PatientNotFound(patient_id.to_owned()))?;

        let (from, origin_label) = resolve_origin(&self.graph, qr_code)?;
        let destination = destination_for_patient(&self.graph, patient, role)?;

        let route = self.router.route(&self.graph, from, destination.node)?;
        let steps = voice_steps(&route, lang);

        let greeting = greeting_for(patient, &origin_label);

        Ok(NavigationPlan {
            patient_id: patient.id.clone(),
            patient_name: patient.name.clone(),
            origin: Waypoint { node: from, label: origin_label },
            destination: Waypoint { node: destination.node, label: destination.label },
            route,
            voice_steps: steps,
            greeting,
        })
    }
}

/// Welcome announcement naming the patient, their ward/room/floor, and the
/// caller's current location.  Same template per variant, each over its own
/// label variants.
fn greeting_for(patient: &crate::PatientRecord, origin: &Label) -> Label {
    let line = |name: &str, ward: &str, here: &str| {
        format!(
            "Welcome! You are looking for patient {name}, who is admitted in {ward}, \
             Room {room}, on Floor {floor}. Your current location is {here}. \
             Please follow the highlighted path on the map. Navigation has started.",
            room = patient.room,
            floor = patient.floor,
        )
    };
    Label::new(
        line(&patient.name.primary, &patient.ward.primary, &origin.primary),
        line(&patient.name.secondary, &patient.ward.secondary, &origin.secondary),
    )
}
