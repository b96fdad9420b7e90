//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing [`Tick`] counter where one tick is one
//! simulated second, driven externally by whoever owns the clock.  There is
//! no wall-clock mapping and no self-scheduling: anything that evolves with
//! time implements [`TimedItem`] and is advanced by its owner once per tick.
//!
//! Owners hold their timed items directly — there is deliberately no global
//! registry that constructors join behind the caller's back.

use std::fmt;

// ── Tick ──────────────────────────────────────────────────────────────────────

/// An absolute simulated-second counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` seconds after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TimedItem ─────────────────────────────────────────────────────────────────

/// One simulated second of time passing.
///
/// Implementors mutate their own state only; cross-object effects (a light
/// cycle recolouring its routes, say) are applied by the owning container so
/// that a single caller drives all ticking.
pub trait TimedItem {
    fn one_second(&mut self);
}
