//! `tn-sim` — the second-by-second simulation driver.
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`sim`]      | `Simulator` — owns a network and the tick loop  |
//! | [`observer`] | `SimObserver` callbacks, `NoopObserver`         |

pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use observer::{NoopObserver, SimObserver};
pub use sim::Simulator;
