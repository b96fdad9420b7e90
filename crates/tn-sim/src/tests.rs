use std::cell::Cell;
use std::rc::Rc;

use tn_core::{Tick, TimedItem, TrafficSignal};
use tn_network::Network;

use crate::{NoopObserver, SimObserver, Simulator};

/// A, B, C with lighted routes into C (yellow 1, duration 3, A first).
fn lighted_network() -> Network {
    let mut network = Network::new();
    for id in ["A", "B", "C"] {
        network.create_intersection(id).unwrap();
    }
    network.connect("A", "C", 50).unwrap();
    network.connect("B", "C", 50).unwrap();
    network.add_lights("C", 3, &["A", "B"]).unwrap();
    network
}

struct TickCounter(Rc<Cell<u64>>);

impl TimedItem for TickCounter {
    fn one_second(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn step_advances_tick_and_network() {
    let mut sim = Simulator::new(lighted_network());
    assert_eq!(sim.current_tick(), Tick::ZERO);

    // Duration 3, yellow 1: green holds through the first second.
    sim.step();
    assert_eq!(sim.current_tick(), Tick(1));
    let signal = sim.network().route("A", "C").unwrap().signal();
    assert_eq!(signal, Some(TrafficSignal::Green));

    sim.step();
    let signal = sim.network().route("A", "C").unwrap().signal();
    assert_eq!(signal, Some(TrafficSignal::Yellow));
}

#[test]
fn extras_tick_with_the_network() {
    let count = Rc::new(Cell::new(0));
    let mut sim = Simulator::new(lighted_network());
    sim.register(Box::new(TickCounter(Rc::clone(&count))));

    sim.run_ticks(5, &mut NoopObserver);
    assert_eq!(count.get(), 5);
    assert_eq!(sim.current_tick(), Tick(5));
}

#[test]
fn observer_sees_post_step_state() {
    struct Recorder {
        starts:  Vec<Tick>,
        signals: Vec<Option<TrafficSignal>>,
    }

    impl SimObserver for Recorder {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }

        fn on_tick_end(&mut self, _tick: Tick, network: &Network) {
            self.signals.push(network.route("A", "C").unwrap().signal());
        }
    }

    let mut recorder = Recorder { starts: Vec::new(), signals: Vec::new() };
    let mut sim = Simulator::new(lighted_network());
    sim.run_ticks(3, &mut recorder);

    assert_eq!(recorder.starts, vec![Tick(0), Tick(1), Tick(2)]);
    assert_eq!(
        recorder.signals,
        vec![
            Some(TrafficSignal::Green),
            Some(TrafficSignal::Yellow),
            Some(TrafficSignal::Red),
        ]
    );
}

#[test]
fn replaced_light_cycle_stops_ticking() {
    let mut sim = Simulator::new(lighted_network());
    sim.step();
    // Swap in a longer cycle with B first.  The old duration-3 cycle would
    // have gone yellow on the next second; the new one holds green.
    sim.network_mut().add_lights("C", 5, &["B", "A"]).unwrap();
    for _ in 0..3 {
        sim.step();
    }
    assert_eq!(
        sim.network().route("B", "C").unwrap().signal(),
        Some(TrafficSignal::Green)
    );
    assert_eq!(
        sim.network().route("A", "C").unwrap().signal(),
        Some(TrafficSignal::Red)
    );
}

#[test]
fn into_network_keeps_final_state() {
    let mut sim = Simulator::new(lighted_network());
    sim.run_ticks(3, &mut NoopObserver);
    let network = sim.into_network();
    // After one full slot (3s) the second route holds green.
    assert_eq!(
        network.route("B", "C").unwrap().signal(),
        Some(TrafficSignal::Green)
    );
}
