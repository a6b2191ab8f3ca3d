//! Shared demo floor plan: a two-floor community clinic.
//!
//! Coordinates are percentage positions on a floor-plan image (0–100 on each
//! axis); edge weights are hand-measured corridor distances in the same
//! units.

use std::sync::Arc;

use nav_core::{Label, MapPoint};
use nav_engine::{PatientRecord, StaticDirectory};
use nav_graph::{FacilityGraph, FacilityGraphBuilder};

/// Build the clinic graph: 13 nodes across two floors, a QR marker at each
/// public entry point, and room codes for the bookable rooms.
pub fn build_clinic() -> Arc<FacilityGraph> {
    let mut b = FacilityGraphBuilder::new();

    // Ground floor.
    let lobby = b.add_node("lobby", Label::new("Main Lobby", "முதன்மை வரவேற்பு"), MapPoint::new(8.0, 50.0), 0, true);
    let reception = b.add_node("reception", Label::new("Reception", "வரவேற்பு மேசை"), MapPoint::new(18.0, 50.0), 0, true);
    let corridor_a = b.add_node("corridor_a", Label::monolingual("Corridor A"), MapPoint::new(35.0, 50.0), 0, false);
    let corridor_b = b.add_node("corridor_b", Label::monolingual("Corridor B"), MapPoint::new(55.0, 50.0), 0, false);
    let pharmacy = b.add_node("pharmacy", Label::new("Pharmacy", "மருந்தகம்"), MapPoint::new(35.0, 25.0), 0, true);
    let room_g05 = b.add_node("room_g05", Label::new("Room G05", "அறை G05"), MapPoint::new(55.0, 22.0), 0, true);
    let ward_a = b.add_node("ward_a", Label::new("General Ward A", "பொது வார்டு A"), MapPoint::new(75.0, 45.0), 0, true);
    let lift_g = b.add_node("lift_g", Label::monolingual("Lift Lobby G"), MapPoint::new(55.0, 72.0), 0, false);

    // First floor.
    let lift_1 = b.add_node("lift_1", Label::monolingual("Lift Lobby 1"), MapPoint::new(55.0, 72.0), 1, false);
    let corridor_c = b.add_node("corridor_c", Label::monolingual("Corridor C"), MapPoint::new(55.0, 48.0), 1, false);
    let icu_1 = b.add_node("icu_1", Label::new("ICU", "தீவிர சிகிச்சைப் பிரிவு"), MapPoint::new(35.0, 40.0), 1, true);
    let room_105 = b.add_node("room_105", Label::new("Room 105", "அறை 105"), MapPoint::new(75.0, 40.0), 1, true);
    let ward_b = b.add_node("ward_b", Label::new("Surgical Ward B", "அறுவை வார்டு B"), MapPoint::new(75.0, 60.0), 1, true);

    // Ground-floor corridors.
    b.add_link(lobby, reception, 3.0);
    b.add_link(reception, corridor_a, 4.0);
    b.add_link(corridor_a, pharmacy, 5.0);
    b.add_link(corridor_a, corridor_b, 6.0);
    b.add_link(corridor_b, room_g05, 4.0);
    b.add_link(corridor_b, ward_a, 5.0);
    b.add_link(corridor_b, lift_g, 3.0);

    // Lift shaft and first-floor corridors.
    b.add_link(lift_g, lift_1, 8.0);
    b.add_link(lift_1, corridor_c, 3.0);
    b.add_link(corridor_c, icu_1, 5.0);
    b.add_link(corridor_c, room_105, 4.0);
    b.add_link(corridor_c, ward_b, 5.0);

    // QR markers posted at the public entry points.
    b.register_qr("QR_ENTRANCE", lobby, Label::new("Main Entrance", "முதன்மை நுழைவாயில்"));
    b.register_qr("QR_LIFT_1", lift_1, Label::monolingual("Lift Lobby, Floor 1"));

    b.register_room("G05", room_g05);
    b.register_room("105", room_105);
    b.register_room("ICU1", icu_1);

    Arc::new(b.build())
}

/// Admissions directory for the demo day.
pub fn admissions() -> StaticDirectory {
    let mut d = StaticDirectory::new();

    d.insert(PatientRecord {
        id: "P001".into(),
        name: Label::new("Anand Kumar", "ஆனந்த் குமார்"),
        ward: Label::new("General Ward A", "பொது வார்டு A"),
        room: "G05".into(),
        floor: 0,
        bed: "B2".into(),
        department: "ICU".into(),
        doctor: Label::new("Dr. Priya Raman", "டாக்டர் பிரியா ராமன்"),
        condition: Label::new("Stable", "நிலையானது"),
    });

    d.insert(PatientRecord {
        id: "P002".into(),
        name: Label::new("Meena Devi", "மீனா தேவி"),
        ward: Label::new("Surgical Ward B", "அறுவை வார்டு B"),
        room: "105".into(),
        floor: 1,
        bed: "B1".into(),
        department: "Surgical".into(),
        doctor: Label::new("Dr. Arjun Nair", "டாக்டர் அர்ஜுன் நாயர்"),
        condition: Label::new("Post-op, recovering", "அறுவைக்குப் பின் மீட்சி"),
    });

    d
}
