//! smallnet — smallest example for the trafficnet crates.
//!
//! Loads a four-intersection network from embedded save-format text, runs
//! it for ten simulated seconds printing every signal change, and finishes
//! with a congestion report.  Swap `NETWORK_TEXT` for a file on disk (via
//! `load_network`) to drive a real network description.

use anyhow::Result;

use tn_core::Tick;
use tn_network::{Network, load_network_str};
use tn_sim::{SimObserver, Simulator};

const SIM_SECONDS: u64 = 10;

// Four intersections around a lighted junction Y: routes into Y from X and
// Z cycle green every three seconds, and three routes carry sensors.
const NETWORK_TEXT: &str = "\
4
5
1
W
X
Y:3:Z,X
Z
X:Y:60:0
Y:X:60:1
PP:5:5,2,4,4,1,5
Y:Z:100:2
PP:8:1,3,2,1,1,3
VC:50:42,40,37,34,35,31
Z:X:40:1
SC:40:39,40,40,40,36,32
Z:Y:100:0:80
";

/// Prints each lighted route's signal after every second.
struct SignalPrinter;

impl SimObserver for SignalPrinter {
    fn on_tick_end(&mut self, tick: Tick, network: &Network) {
        let mut line = format!("{tick} ");
        for route in network.routes() {
            if let Some(signal) = route.signal() {
                line.push_str(&format!(" {}={}", route.key(), signal));
            }
        }
        println!("{line}");
    }
}

fn main() -> Result<()> {
    let network = load_network_str(NETWORK_TEXT)?;
    println!(
        "loaded {} intersections, {} routes, yellow time {}",
        network.intersection_count(),
        network.route_count(),
        network.yellow_time()
    );

    // Saving reproduces the canonical text exactly.
    assert_eq!(network.to_string(), NETWORK_TEXT);

    let mut sim = Simulator::new(network);
    sim.run_ticks(SIM_SECONDS, &mut SignalPrinter);

    let network = sim.into_network();
    println!("\ncongestion after {SIM_SECONDS}s:");
    for route in network.routes() {
        if route.sensor_count() > 0 {
            println!("  {}: {}%", route.key(), route.congestion());
        }
    }

    let reloaded = load_network_str(&network.to_string())?;
    assert_eq!(reloaded, network);
    println!("\nsave/load round trip verified");
    Ok(())
}
