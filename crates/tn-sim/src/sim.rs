//! The `Simulator` struct and its tick loop.

use tn_core::{Tick, TimedItem};
use tn_network::Network;

use crate::SimObserver;

/// Drives a [`Network`] forward one simulated second at a time.
///
/// The network's lights and sensors advance through its own
/// [`TimedItem`] implementation; any number of extra timed items (custom
/// clocks, recorders) can be registered to tick alongside it.  The network
/// always advances first within a second, so observers and extras see the
/// post-transition signal state.
pub struct Simulator {
    network: Network,
    current: Tick,
    extras:  Vec<Box<dyn TimedItem>>,
}

impl Simulator {
    pub fn new(network: Network) -> Self {
        Simulator {
            network,
            current: Tick::ZERO,
            extras: Vec::new(),
        }
    }

    #[inline]
    pub fn network(&self) -> &Network {
        &self.network
    }

    #[inline]
    pub fn network_mut(&mut self) -> &mut Network {
        &mut self.network
    }

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.current
    }

    /// Register an extra item to advance with every simulated second.
    pub fn register(&mut self, item: Box<dyn TimedItem>) {
        self.extras.push(item);
    }

    /// Advance everything by one second.
    pub fn step(&mut self) {
        self.network.one_second();
        for extra in &mut self.extras {
            extra.one_second();
        }
        self.current = self.current + 1;
    }

    /// Run `ticks` seconds, reporting each one to the observer.
    pub fn run_ticks(&mut self, ticks: u64, observer: &mut dyn SimObserver) {
        for _ in 0..ticks {
            observer.on_tick_start(self.current);
            self.step();
            observer.on_tick_end(self.current, &self.network);
        }
    }

    /// Consume the simulator, yielding the network in its final state.
    pub fn into_network(self) -> Network {
        self.network
    }
}
