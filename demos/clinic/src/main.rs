//! clinic — end-to-end walkthrough of the indoor navigation engine.
//!
//! A visitor scans the entrance QR marker and is guided to a patient's
//! room; the same route is then replayed in all three session modes (auto
//! playback on a logical clock, manual stepping, live position reports)
//! and the visit's telemetry trail is exported to CSV.

mod floorplan;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use nav_core::{Lang, MapPoint, Tick};
use nav_engine::{NavEngine, Role};
use nav_session::{export_csv, AutoPace, Mode, NavigationSession};

use floorplan::{admissions, build_clinic};

const SEED: u64 = 42;
const TICKS_PER_SEGMENT: u32 = 4;

fn main() -> Result<()> {
    println!("=== clinic — indoor navigation demo ===");
    println!();

    // 1. Floor plan and admissions directory.
    let graph = build_clinic();
    let directory = admissions();
    println!(
        "Floor plan: {} nodes, {} links across 2 floors",
        graph.node_count(),
        graph.edge_count()
    );
    println!();

    // 2. A visitor scans the entrance marker and asks for patient P002.
    let engine = NavEngine::new(Arc::clone(&graph));
    let plan = engine.navigate_to_patient(&directory, "P002", "QR_ENTRANCE", Role::Visitor, Lang::Primary)?;

    println!("{}", plan.greeting.primary);
    println!();
    println!(
        "Route: {} stops, {:.1} units ({} -> {})",
        plan.route.total_steps(),
        plan.route.total_distance,
        plan.origin.label.primary,
        plan.destination.label.primary,
    );
    for line in &plan.voice_steps {
        println!("  • {line}");
    }
    println!();

    // 3. Auto playback on the logical clock.
    let route = plan.route.clone();
    let mut session = plan.start_session()?.with_pace(AutoPace::new(TICKS_PER_SEGMENT));
    println!("--- Auto playback ({TICKS_PER_SEGMENT} ticks per segment) ---");
    let mut now = Tick::ZERO;
    while !session.arrived() {
        now = now + 1;
        for announcement in session.tick(now) {
            println!("  [{now}] {}", announcement.primary);
        }
        let pos = session.playback_position(now);
        if !pos.finished {
            println!("  [{now}] segment {} at {:.0} %", pos.segment, pos.fraction * 100.0);
        }
    }
    println!("  arrived after {now}");
    println!();

    // 4. The same route stepped manually.
    let mut session = NavigationSession::new(route.clone(), session.voice_steps().to_vec())?;
    session.set_mode(Mode::Manual);
    println!("--- Manual stepping ---");
    let mut now = Tick::ZERO;
    while !session.arrived() {
        now = now + 1;
        if let Some(announcement) = session.advance(1, now) {
            println!("  [{now}] {}", announcement.primary);
        }
    }
    // One step back and forward again, as a user fumbling the controls would.
    now = now + 1;
    if let Some(announcement) = session.advance(-1, now) {
        println!("  [{now}] (back) {}", announcement.primary);
    }
    now = now + 1;
    if let Some(announcement) = session.advance(1, now) {
        println!("  [{now}] (forward) {}", announcement.primary);
    }
    println!();

    // 5. Live mode: jittered position reports along the corridor path.
    let waypoints: Vec<(MapPoint, i16)> = route.steps.iter().map(|s| (s.pos, s.floor)).collect();
    let mut session = NavigationSession::new(route, session.voice_steps().to_vec())?;
    session.set_mode(Mode::Live);
    println!("--- Live position reports (seed {SEED}) ---");
    let mut rng = SmallRng::seed_from_u64(SEED);
    let mut now = Tick::ZERO;
    for (pos, floor) in &waypoints {
        now = now + 1;
        let jittered = MapPoint::new(
            pos.x + rng.gen_range(-1.5..1.5),
            pos.y + rng.gen_range(-1.5..1.5),
        );
        match session.report_position(jittered, *floor, now) {
            Some(idx) => println!(
                "  [{now}] ({:5.1}, {:5.1}) floor {floor} -> snapped to stop {idx}",
                jittered.x, jittered.y
            ),
            None => println!(
                "  [{now}] ({:5.1}, {:5.1}) floor {floor} -> no snap",
                jittered.x, jittered.y
            ),
        }
    }
    println!("  arrived: {}", session.arrived());
    println!();

    // 6. Telemetry trail from the live walk.
    std::fs::create_dir_all("output/clinic")?;
    let out = Path::new("output/clinic/telemetry.csv");
    export_csv(out, session.telemetry())?;
    println!("Telemetry: {} records -> {}", session.telemetry().len(), out.display());
    println!();
    println!("{:<12} {:<8} {:<8}", "Node", "Floor", "Tick");
    println!("{}", "-".repeat(30));
    for rec in session.telemetry() {
        println!("{:<12} {:<8} {:<8}", rec.node, rec.floor, rec.tick);
    }

    Ok(())
}
