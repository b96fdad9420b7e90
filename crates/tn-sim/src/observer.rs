//! Simulation observer trait for progress reporting and data collection.

use tn_core::Tick;
use tn_network::Network;

/// Callbacks invoked by [`Simulator::run_ticks`][crate::Simulator::run_ticks]
/// around each simulated second.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — signal printer
///
/// ```rust,ignore
/// struct SignalPrinter;
///
/// impl SimObserver for SignalPrinter {
///     fn on_tick_end(&mut self, tick: Tick, network: &Network) {
///         for route in network.routes() {
///             if let Some(signal) = route.signal() {
///                 println!("{tick}  {}: {signal}", route.key());
///             }
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before each second is applied.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each second, with read-only access to the advanced
    /// network state.
    fn on_tick_end(&mut self, _tick: Tick, _network: &Network) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
