//! Unit tests for nav-guide.

#[cfg(test)]
mod helpers {
    use nav_core::{Label, MapPoint, NodeId};
    use nav_route::{Route, RouteStep};

    /// Build an annotated route directly — no graph needed for string rules.
    pub fn route_of(nodes: &[(&str, &str, i16)]) -> Route {
        let steps = nodes
            .iter()
            .enumerate()
            .map(|(i, &(primary, secondary, floor))| RouteStep {
                node: NodeId(i as u32),
                code: primary.to_lowercase().replace(' ', "_"),
                label: Label::new(primary, secondary),
                pos: MapPoint::new(i as f32 * 10.0, 0.0),
                floor,
                step_index: i,
            })
            .collect();
        Route { steps, total_distance: 0.0 }
    }
}

#[cfg(test)]
mod voice {
    use nav_core::Lang;

    use crate::voice_steps;
    use super::helpers::route_of;

    #[test]
    fn two_hop_floor_change_exact_strings() {
        let route = route_of(&[("A", "", 0), ("B", "", 0), ("C", "", 1)]);
        let steps = voice_steps(&route, Lang::Primary);
        assert_eq!(
            steps,
            vec![
                "Starting navigation from A.",
                "Head towards B.",
                "Take the elevator or stairs up to Floor 1.",
                "You have reached your destination: C.",
            ]
        );
    }

    #[test]
    fn floor_change_subsumes_label_rules() {
        // Next node is a ward, but the floor change wins.
        let route = route_of(&[("Lobby", "", 0), ("Ward A", "", 1)]);
        let steps = voice_steps(&route, Lang::Primary);
        assert_eq!(steps[1], "Take the elevator or stairs up to Floor 1.");
        assert!(!steps.iter().any(|s| s.contains("Proceed")));
    }

    #[test]
    fn downward_floor_change() {
        let route = route_of(&[("Lift Lobby 2", "", 2), ("Lift Lobby G", "", 0)]);
        let steps = voice_steps(&route, Lang::Primary);
        assert_eq!(steps[1], "Take the elevator or stairs down to Floor 0.");
    }

    #[test]
    fn label_classification_priority() {
        let route = route_of(&[
            ("Reception", "", 0),
            ("Corridor 2", "", 0),
            ("Ward B", "", 0),
            ("Room G05", "", 0),
        ]);
        let steps = voice_steps(&route, Lang::Primary);
        assert_eq!(steps[1], "Continue through the Corridor 2.");
        assert_eq!(steps[2], "Proceed to the Ward B.");
        assert_eq!(steps[3], "Your destination is Room G05. You have arrived!");
    }

    #[test]
    fn icu_counts_as_destination() {
        let route = route_of(&[("Lobby", "", 0), ("ICU", "", 0)]);
        let steps = voice_steps(&route, Lang::Primary);
        assert_eq!(steps[1], "Your destination is ICU. You have arrived!");
    }

    #[test]
    fn single_node_route_two_lines() {
        let route = route_of(&[("Pharmacy", "", 0)]);
        let steps = voice_steps(&route, Lang::Primary);
        assert_eq!(
            steps,
            vec![
                "Starting navigation from Pharmacy.",
                "You have reached your destination: Pharmacy.",
            ]
        );
    }

    #[test]
    fn last_line_always_names_final_label() {
        for len in 1..6 {
            let nodes: Vec<(String, String)> = (0..len)
                .map(|i| (format!("Stop {i}"), String::new()))
                .collect();
            let borrowed: Vec<(&str, &str, i16)> =
                nodes.iter().map(|(p, s)| (p.as_str(), s.as_str(), 0)).collect();
            let route = route_of(&borrowed);
            let steps = voice_steps(&route, Lang::Primary);
            let expected = format!("You have reached your destination: Stop {}.", len - 1);
            assert_eq!(steps.last().unwrap(), &expected);
        }
    }

    #[test]
    fn secondary_language_renders_secondary_labels() {
        let route = route_of(&[("Main Lobby", "முதன்மை வரவேற்பு", 0), ("Ward A", "வார்டு A", 0)]);
        let steps = voice_steps(&route, Lang::Secondary);
        assert_eq!(steps[0], "Starting navigation from முதன்மை வரவேற்பு.");
        // Classification still keys on the primary label ("Ward A").
        assert_eq!(steps[1], "Proceed to the வார்டு A.");
    }
}

#[cfg(test)]
mod announcements {
    use crate::reached_announcement;
    use super::helpers::route_of;

    #[test]
    fn intermediate_node() {
        let route = route_of(&[("Lobby", "வரவேற்பு", 0), ("Ward A", "", 0)]);
        let said = reached_announcement(&route.steps[0], false);
        assert_eq!(said.primary, "Reached Lobby.");
        assert_eq!(said.secondary, "Reached வரவேற்பு.");
    }

    #[test]
    fn final_node_appends_arrival() {
        let route = route_of(&[("Lobby", "", 0), ("Room G05", "", 0)]);
        let said = reached_announcement(&route.steps[1], true);
        assert_eq!(said.primary, "Reached Room G05. You have arrived.");
    }
}
