//! Voice-step generation rules.
//!
//! Rules fire in node-transition order (`current = steps[i]`,
//! `next = steps[i+1]`):
//!
//! 1. The first node always opens with a "starting navigation" line.
//! 2. A floor change emits a vertical-transport line (lift or stairs, up or
//!    down, destination floor) and **subsumes every label rule** for that
//!    transition.
//! 3. Otherwise the next label classifies by case-insensitive substring, in
//!    priority order: corridor → continue-through, ward → proceed-to,
//!    room/ICU → destination-arrived, anything else → head-towards.
//! 4. A terminal "you have reached your destination" line always closes the
//!    list, independent of what the last transition produced.
//!
//! A single-node route (start == destination) therefore yields exactly two
//! lines: the start line and the arrival line.

use nav_core::{Label, Lang};
use nav_route::{Route, RouteStep};

/// Generate the ordered voice instructions for `route`, rendered in `lang`.
///
/// Always non-empty: even a trivial route produces a start and an arrival
/// line.
pub fn voice_steps(route: &Route, lang: Lang) -> Vec<String> {
    let steps = &route.steps;
    let mut out = Vec::with_capacity(steps.len() + 1);

    for (i, current) in steps.iter().enumerate() {
        if i == 0 {
            out.push(format!("Starting navigation from {}.", current.label.text(lang)));
        }

        if let Some(next) = steps.get(i + 1) {
            out.push(transition_line(current, next, lang));
        }

        if i == steps.len() - 1 {
            out.push(format!(
                "You have reached your destination: {}.",
                current.label.text(lang)
            ));
        }
    }

    out
}

fn transition_line(current: &RouteStep, next: &RouteStep, lang: Lang) -> String {
    // Floor changes take priority over label-keyword rules.
    if next.floor != current.floor {
        let direction = if next.floor > current.floor { "up" } else { "down" };
        return format!("Take the elevator or stairs {direction} to Floor {}.", next.floor);
    }

    // Classification is keyed on the primary variant; only rendering follows
    // the selected language.
    let keyword = next.label.primary.to_lowercase();
    let shown = next.label.text(lang);

    if keyword.contains("corridor") {
        format!("Continue through the {shown}.")
    } else if keyword.contains("ward") {
        format!("Proceed to the {shown}.")
    } else if keyword.contains("room") || keyword.contains("icu") {
        format!("Your destination is {shown}. You have arrived!")
    } else {
        format!("Head towards {shown}.")
    }
}

/// The bilingual announcement a session speaks when the user reaches a route
/// node: "Reached {label}", with an arrival phrase appended on the final
/// node.  Both variants use the same template over their own label variant so
/// the generator stays language-agnostic.
pub fn reached_announcement(step: &RouteStep, is_last: bool) -> Label {
    let line = |text: &str| {
        if is_last {
            format!("Reached {text}. You have arrived.")
        } else {
            format!("Reached {text}.")
        }
    };
    Label::new(line(&step.label.primary), line(&step.label.secondary))
}
