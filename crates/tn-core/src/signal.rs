//! Traffic-light signal state.

use std::fmt;

/// The colour shown to traffic entering a route.
///
/// A route only carries a signal while it is governed by an intersection's
/// light cycle; the cycle guarantees that exactly one of its routes is
/// non-red at any instant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficSignal {
    Green,
    Yellow,
    Red,
}

impl TrafficSignal {
    /// Upper-case label, as used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficSignal::Green  => "GREEN",
            TrafficSignal::Yellow => "YELLOW",
            TrafficSignal::Red    => "RED",
        }
    }

    #[inline]
    pub fn is_red(self) -> bool {
        self == TrafficSignal::Red
    }
}

impl fmt::Display for TrafficSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
