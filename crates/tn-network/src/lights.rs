//! The per-intersection traffic-light cycle state machine.
//!
//! # Produce-then-apply
//!
//! The cycle never holds a reference into the route map.  Each call to
//! [`LightCycle::one_second`] advances the internal timers and reports the
//! resulting signal changes as a [`LightStep`]; the owning `Network` applies
//! the step to the affected routes' signals.  At most one transition occurs
//! per tick.
//!
//! # Invariant
//!
//! Exactly one owned slot is non-red at any instant: the slot at `index`
//! shows the active phase (green or yellow), every other slot shows red.

use std::fmt;

use tn_core::{RouteKey, TrafficSignal};

// ── LightStep ─────────────────────────────────────────────────────────────────

/// Signal changes produced by one tick of a [`LightCycle`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LightStep {
    /// No transition this second.
    None,
    /// The active route's green phase elapsed; it shows yellow now.
    TurnYellow(RouteKey),
    /// The active route's yellow phase elapsed; it turns red and the next
    /// slot in cycle order goes green.
    Advance { stop: RouteKey, go: RouteKey },
}

// ── LightCycle ────────────────────────────────────────────────────────────────

/// Timed state machine selecting which incoming route is green.
///
/// Constructed only by `Network::add_lights`, which guarantees the slots are
/// a non-empty permutation of the intersection's incoming routes,
/// `yellow_time >= 1`, and `duration > yellow_time`.  The machine assumes
/// those invariants once running.
#[derive(Clone, Debug)]
pub struct LightCycle {
    /// Controlled incoming routes, in cycle order.
    slots:          Vec<RouteKey>,
    yellow_time:    u32,
    duration:       u32,
    /// Index of the slot currently showing the active phase.
    index:          usize,
    /// Green or Yellow — what the active slot shows right now.
    active:         TrafficSignal,
    green_elapsed:  u32,
    yellow_elapsed: u32,
}

impl LightCycle {
    pub(crate) fn new(slots: Vec<RouteKey>, yellow_time: u32, duration: u32) -> Self {
        LightCycle {
            slots,
            yellow_time,
            duration,
            index: 0,
            active: TrafficSignal::Green,
            green_elapsed: 0,
            yellow_elapsed: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn yellow_time(&self) -> u32 {
        self.yellow_time
    }

    #[inline]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Controlled routes in cycle order.
    pub fn slots(&self) -> &[RouteKey] {
        &self.slots
    }

    /// The route currently showing green or yellow.
    pub fn active_route(&self) -> &RouteKey {
        &self.slots[self.index]
    }

    /// What the active route shows right now (green or yellow).
    pub fn active_signal(&self) -> TrafficSignal {
        self.active
    }

    /// Signal assignment at (re)attachment: slot 0 green, the rest red.
    pub(crate) fn initial_signals(&self) -> impl Iterator<Item = (&RouteKey, TrafficSignal)> {
        self.slots.iter().enumerate().map(|(i, key)| {
            let signal = if i == 0 {
                TrafficSignal::Green
            } else {
                TrafficSignal::Red
            };
            (key, signal)
        })
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Advance the cycle one simulated second.
    ///
    /// A green phase lasts `duration - yellow_time` seconds, a yellow phase
    /// `yellow_time` seconds; when a yellow phase ends the active index
    /// advances with wraparound and the new slot goes green with fresh
    /// counters.
    pub(crate) fn one_second(&mut self) -> LightStep {
        if self.slots.is_empty() {
            return LightStep::None;
        }
        match self.active {
            TrafficSignal::Green => {
                self.green_elapsed += 1;
                if self.green_elapsed + self.yellow_time == self.duration {
                    self.active = TrafficSignal::Yellow;
                    self.green_elapsed = 0;
                    LightStep::TurnYellow(self.slots[self.index].clone())
                } else {
                    LightStep::None
                }
            }
            _ => {
                self.yellow_elapsed += 1;
                if self.yellow_elapsed == self.yellow_time {
                    self.yellow_elapsed = 0;
                    let stop = self.slots[self.index].clone();
                    self.index = (self.index + 1) % self.slots.len();
                    self.active = TrafficSignal::Green;
                    LightStep::Advance {
                        stop,
                        go: self.slots[self.index].clone(),
                    }
                } else {
                    LightStep::None
                }
            }
        }
    }

    /// Change the total cycle duration.
    ///
    /// The phase restarts: both counters reset to zero and an in-progress
    /// yellow truncates back to green, so shrinking the duration below the
    /// remaining time cannot make the timers overshoot.  Returns the route
    /// to re-green when a yellow was truncated.
    pub(crate) fn set_duration(&mut self, duration: u32) -> Option<RouteKey> {
        self.duration = duration;
        self.green_elapsed = 0;
        self.yellow_elapsed = 0;
        if self.active == TrafficSignal::Yellow {
            self.active = TrafficSignal::Green;
            Some(self.slots[self.index].clone())
        } else {
            None
        }
    }
}

/// `duration:from1,from2,...` — origin IDs of the controlled routes in cycle
/// order.
impl fmt::Display for LightCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.duration)?;
        for (i, key) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", key.from)?;
        }
        Ok(())
    }
}
