//! Unit tests for tn-core.

use crate::{IntersectionId, InvalidIdError, RouteKey, Tick, TrafficSignal};

fn id(s: &str) -> IntersectionId {
    IntersectionId::new(s).unwrap()
}

// ── IntersectionId ────────────────────────────────────────────────────────────

#[cfg(test)]
mod ids {
    use super::*;

    #[test]
    fn accepts_plain_names() {
        assert_eq!(id("A").as_str(), "A");
        assert_eq!(id("north junction").as_str(), "north junction");
        assert_eq!(id("12").as_str(), "12");
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(IntersectionId::new(""), Err(InvalidIdError::Blank));
        assert_eq!(IntersectionId::new("   "), Err(InvalidIdError::Blank));
        assert_eq!(IntersectionId::new("\t\n"), Err(InvalidIdError::Blank));
    }

    #[test]
    fn rejects_colon() {
        assert_eq!(
            IntersectionId::new("A:B"),
            Err(InvalidIdError::ContainsColon("A:B".into()))
        );
    }

    #[test]
    fn orders_alphabetically() {
        let mut v = vec![id("Z"), id("A"), id("M")];
        v.sort();
        let names: Vec<&str> = v.iter().map(IntersectionId::as_str).collect();
        assert_eq!(names, vec!["A", "M", "Z"]);
    }
}

// ── RouteKey ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod route_key {
    use super::*;

    #[test]
    fn display_is_colon_joined() {
        let key = RouteKey::new(id("X"), id("Y"));
        assert_eq!(key.to_string(), "X:Y");
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let key = RouteKey::new(id("X"), id("Y"));
        let rev = key.reversed();
        assert_eq!(rev.from, id("Y"));
        assert_eq!(rev.to, id("X"));
        assert_eq!(rev.reversed(), key);
    }

    #[test]
    fn order_is_lexicographic_on_from_then_to() {
        let mut v = vec![
            RouteKey::new(id("Y"), id("X")),
            RouteKey::new(id("X"), id("Y")),
            RouteKey::new(id("X"), id("X")),
        ];
        v.sort();
        let rendered: Vec<String> = v.iter().map(RouteKey::to_string).collect();
        assert_eq!(rendered, vec!["X:X", "X:Y", "Y:X"]);
    }

    #[test]
    fn self_loop_is_its_own_reverse() {
        let key = RouteKey::new(id("X"), id("X"));
        assert_eq!(key.reversed(), key);
    }
}

// ── Tick / TrafficSignal ──────────────────────────────────────────────────────

#[cfg(test)]
mod time_and_signal {
    use super::*;

    #[test]
    fn tick_arithmetic() {
        assert_eq!(Tick::ZERO + 5, Tick(5));
        assert_eq!(Tick(7).offset(3), Tick(10));
        assert_eq!(Tick(10) - Tick(4), 6);
        assert_eq!(Tick(3).to_string(), "T3");
    }

    #[test]
    fn signal_labels() {
        assert_eq!(TrafficSignal::Green.to_string(), "GREEN");
        assert_eq!(TrafficSignal::Yellow.as_str(), "YELLOW");
        assert!(TrafficSignal::Red.is_red());
        assert!(!TrafficSignal::Green.is_red());
    }
}
