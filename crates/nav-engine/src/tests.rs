//! Unit tests for nav-engine.

#[cfg(test)]
mod helpers {
    use std::sync::Arc;

    use nav_core::{Label, MapPoint, NodeId};
    use nav_graph::{FacilityGraph, FacilityGraphBuilder};

    use crate::{NavEngine, PatientRecord, StaticDirectory};

    /// Two-floor clinic: ground-floor lobby/corridor/room wing, first-floor
    /// ICU behind a lift.
    pub fn clinic() -> (Arc<FacilityGraph>, [NodeId; 7]) {
        let mut b = FacilityGraphBuilder::new();

        let lobby = b.add_node("lobby", Label::new("Main Lobby", "முதன்மை வரவேற்பு"), MapPoint::new(10.0, 50.0), 0, true);
        let corridor = b.add_node("corridor_1", Label::monolingual("Corridor 1"), MapPoint::new(35.0, 50.0), 0, false);
        let room = b.add_node("room_g05", Label::new("Room G05", "அறை G05"), MapPoint::new(45.0, 20.0), 0, true);
        let lift_g = b.add_node("lift_g", Label::monolingual("Lift Lobby G"), MapPoint::new(50.0, 70.0), 0, false);
        let lift_1 = b.add_node("lift_1", Label::monolingual("Lift Lobby 1"), MapPoint::new(50.0, 70.0), 1, false);
        let icu = b.add_node("icu_1", Label::new("ICU", "தீவிர சிகிச்சை"), MapPoint::new(70.0, 60.0), 1, true);
        let ward = b.add_node("ward_a", Label::new("Ward A", "வார்டு A"), MapPoint::new(60.0, 30.0), 0, true);

        b.add_link(lobby, corridor, 5.0);
        b.add_link(corridor, room, 2.0);
        b.add_link(corridor, lift_g, 3.0);
        b.add_link(lift_g, lift_1, 6.0);
        b.add_link(lift_1, icu, 4.0);
        b.add_link(corridor, ward, 4.0);

        b.register_qr("QR_ENTRANCE", lobby, Label::monolingual("Main Entrance"));
        b.register_room("G05", room);

        (Arc::new(b.build()), [lobby, corridor, room, lift_g, lift_1, icu, ward])
    }

    pub fn directory() -> StaticDirectory {
        let mut d = StaticDirectory::new();
        d.insert(PatientRecord {
            id: "P001".into(),
            name: Label::new("Anand Kumar", "ஆனந்த் குமார்"),
            ward: Label::new("General Ward", "பொது வார்டு"),
            room: "G05".into(),
            floor: 0,
            bed: "B2".into(),
            department: "ICU".into(),
            doctor: Label::new("Dr. Priya", "டாக்டர் பிரியா"),
            condition: Label::new("Stable", "நிலையானது"),
        });
        d
    }

    pub fn engine() -> (NavEngine, [NodeId; 7]) {
        let (graph, nodes) = clinic();
        (NavEngine::new(graph), nodes)
    }
}

// ── Origin resolution ─────────────────────────────────────────────────────────

#[cfg(test)]
mod origin {
    use crate::{resolve_origin, ResolveError};
    use super::helpers::clinic;

    #[test]
    fn qr_code_resolves_with_marker_label() {
        let (g, [lobby, ..]) = clinic();
        let (node, label) = resolve_origin(&g, "QR_ENTRANCE").unwrap();
        assert_eq!(node, lobby);
        assert_eq!(label.primary, "Main Entrance");
    }

    #[test]
    fn node_code_resolves_with_node_label() {
        let (g, [_, corridor, ..]) = clinic();
        let (node, label) = resolve_origin(&g, "corridor_1").unwrap();
        assert_eq!(node, corridor);
        assert_eq!(label.primary, "Corridor 1");
    }

    #[test]
    fn unknown_locator_errors() {
        let (g, _) = clinic();
        assert!(matches!(
            resolve_origin(&g, "QR_BASEMENT"),
            Err(ResolveError::UnknownLocation(_))
        ));
    }
}

// ── Destination resolution & role policy ──────────────────────────────────────

#[cfg(test)]
mod destination {
    use crate::{destination_for_patient, resolve_destination, ResolveError, Role};
    use crate::directory::PatientDirectory;
    use super::helpers::{clinic, directory};

    #[test]
    fn room_code_resolves_for_visitor() {
        let (g, [_, _, room, ..]) = clinic();
        let d = directory();
        let dest = resolve_destination(&g, &d, "G05", Role::Visitor).unwrap();
        assert_eq!(dest.node, room);
    }

    #[test]
    fn unknown_room_is_destination_not_found() {
        let (g, _) = clinic();
        let d = directory();
        assert!(matches!(
            resolve_destination(&g, &d, "unknown-room", Role::Visitor),
            Err(ResolveError::DestinationNotFound(_))
        ));
    }

    #[test]
    fn patient_role_prefers_department_node() {
        let (g, [.., icu, _]) = clinic();
        let d = directory();
        let patient = d.patient("P001").unwrap();
        let dest = destination_for_patient(&g, patient, Role::Patient).unwrap();
        assert_eq!(dest.node, icu);
        assert!(dest.label.primary.contains("Dr. Priya"));
        assert!(dest.label.primary.contains("ICU"));
    }

    #[test]
    fn visitor_role_resolves_literal_room() {
        let (g, [_, _, room, ..]) = clinic();
        let d = directory();
        let patient = d.patient("P001").unwrap();
        let dest = destination_for_patient(&g, patient, Role::Visitor).unwrap();
        assert_eq!(dest.node, room);
        assert!(dest.label.primary.contains("Room G05"));
        assert!(dest.label.primary.contains("General Ward"));
    }

    #[test]
    fn patient_role_falls_back_to_room_when_department_unmatched() {
        let (g, [_, _, room, ..]) = clinic();
        let d = directory();
        let mut patient = d.patient("P001").unwrap().clone();
        patient.department = "Radiology".into(); // no such node in the clinic
        let dest = destination_for_patient(&g, &patient, Role::Patient).unwrap();
        assert_eq!(dest.node, room);
    }

    #[test]
    fn nothing_resolvable_is_destination_not_found() {
        let (g, _) = clinic();
        let d = directory();
        let mut patient = d.patient("P001").unwrap().clone();
        patient.department = "Radiology".into();
        patient.room = "Z99".into();
        assert!(matches!(
            destination_for_patient(&g, &patient, Role::Patient),
            Err(ResolveError::DestinationNotFound(_))
        ));
    }

    #[test]
    fn patient_id_query_applies_role_policy() {
        let (g, [.., icu, _]) = clinic();
        let d = directory();
        let dest = resolve_destination(&g, &d, "P001", Role::Patient).unwrap();
        assert_eq!(dest.node, icu);
    }

    #[test]
    fn department_keyword_query_resolves() {
        let (g, [.., ward]) = clinic();
        let d = directory();
        let dest = resolve_destination(&g, &d, "ward a", Role::Staff).unwrap();
        assert_eq!(dest.node, ward);
    }
}

// ── compute_path ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod compute_path {
    use nav_core::Lang;

    use crate::EngineError;
    use super::helpers::engine;

    #[test]
    fn qr_start_to_room_code() {
        let (eng, [lobby, _, room, ..]) = engine();
        let plan = eng.compute_path("QR_ENTRANCE", "room_g05", Lang::Primary).unwrap();

        assert_eq!(plan.origin.node, lobby);
        assert_eq!(plan.destination.node, room);
        assert_eq!(plan.route.total_distance, 7.0); // lobby —5— corridor —2— room
        assert_eq!(plan.route.total_steps(), 3);

        assert_eq!(plan.voice_steps[0], "Starting navigation from Main Lobby.");
        assert_eq!(
            plan.voice_steps.last().unwrap(),
            "You have reached your destination: Room G05."
        );
    }

    #[test]
    fn cross_floor_route_includes_lift_instruction() {
        let (eng, _) = engine();
        let plan = eng.compute_path("lobby", "icu_1", Lang::Primary).unwrap();
        assert!(plan
            .voice_steps
            .iter()
            .any(|s| s == "Take the elevator or stairs up to Floor 1."));
    }

    #[test]
    fn unknown_locator_surfaces_resolve_error() {
        let (eng, _) = engine();
        let err = eng.compute_path("lobby", "mars", Lang::Primary).unwrap_err();
        assert!(matches!(err, EngineError::Resolve(_)));
    }
}

// ── navigate_to_patient ───────────────────────────────────────────────────────

#[cfg(test)]
mod navigate {
    use nav_core::Lang;

    use crate::{EngineError, Role};
    use super::helpers::{directory, engine};

    #[test]
    fn patient_route_ends_at_department() {
        let (eng, [.., icu, _]) = engine();
        let d = directory();
        let plan = eng
            .navigate_to_patient(&d, "P001", "QR_ENTRANCE", Role::Patient, Lang::Primary)
            .unwrap();
        assert_eq!(plan.destination.node, icu);
        assert_eq!(plan.route.destination().node, icu);
    }

    #[test]
    fn visitor_route_ends_at_room() {
        let (eng, [_, _, room, ..]) = engine();
        let d = directory();
        let plan = eng
            .navigate_to_patient(&d, "P001", "QR_ENTRANCE", Role::Visitor, Lang::Primary)
            .unwrap();
        assert_eq!(plan.destination.node, room);
    }

    #[test]
    fn greeting_names_patient_room_floor_and_origin() {
        let (eng, _) = engine();
        let d = directory();
        let plan = eng
            .navigate_to_patient(&d, "P001", "QR_ENTRANCE", Role::Visitor, Lang::Primary)
            .unwrap();
        let g = &plan.greeting.primary;
        assert!(g.contains("Anand Kumar"));
        assert!(g.contains("General Ward"));
        assert!(g.contains("Room G05"));
        assert!(g.contains("Floor 0"));
        assert!(g.contains("Main Entrance"));

        // Secondary variant built from secondary label variants.
        assert!(plan.greeting.secondary.contains("ஆனந்த் குமார்"));
    }

    #[test]
    fn unknown_patient_errors() {
        let (eng, _) = engine();
        let d = directory();
        let err = eng
            .navigate_to_patient(&d, "P999", "QR_ENTRANCE", Role::Visitor, Lang::Primary)
            .unwrap_err();
        assert!(matches!(err, EngineError::PatientNotFound(_)));
    }

    #[test]
    fn plan_starts_a_session() {
        let (eng, _) = engine();
        let d = directory();
        let plan = eng
            .navigate_to_patient(&d, "P001", "QR_ENTRANCE", Role::Visitor, Lang::Primary)
            .unwrap();
        let total = plan.route.total_steps();
        let session = plan.start_session().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.route().total_steps(), total);
    }
}
