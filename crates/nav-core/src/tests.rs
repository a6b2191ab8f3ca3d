//! Unit tests for nav-core.

use crate::{Label, Lang, MapPoint, NodeId, Tick};

#[cfg(test)]
mod ids {
    use super::*;

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(NodeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn index_round_trip() {
        let id = NodeId(7);
        assert_eq!(id.index(), 7);
        assert_eq!(NodeId::try_from(7usize).unwrap(), id);
    }

    #[test]
    fn display_names_the_type() {
        assert_eq!(NodeId(3).to_string(), "NodeId(3)");
    }
}

#[cfg(test)]
mod label {
    use super::*;

    #[test]
    fn text_selects_variant() {
        let l = Label::new("Pharmacy", "மருந்தகம்");
        assert_eq!(l.text(Lang::Primary), "Pharmacy");
        assert_eq!(l.text(Lang::Secondary), "மருந்தகம்");
    }

    #[test]
    fn empty_secondary_falls_back() {
        let l = Label::new("Junction 2", "");
        assert_eq!(l.text(Lang::Secondary), "Junction 2");
    }

    #[test]
    fn spoken_collapses_identical_variants() {
        let mono = Label::monolingual("Lift Lobby");
        assert_eq!(mono.spoken(), "Lift Lobby");

        let bi = Label::new("Ward A", "வார்டு A");
        assert_eq!(bi.spoken(), "Ward A வார்டு A");
    }
}

#[cfg(test)]
mod point {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = MapPoint::new(0.0, 0.0);
        let b = MapPoint::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance(a), 0.0);
    }
}

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn offset_and_since() {
        let t = Tick(10);
        assert_eq!(t.offset(5), Tick(15));
        assert_eq!(Tick(15).since(t), 5);
    }

    #[test]
    fn since_saturates() {
        assert_eq!(Tick(3).since(Tick(9)), 0);
    }
}
