//! `tn-network` — the traffic network graph and its save format.
//!
//! # What lives here
//!
//! | Module           | Contents                                                |
//! |------------------|---------------------------------------------------------|
//! | [`route`]        | `Route`, `SpeedSign` — directed edges with sensors      |
//! | [`intersection`] | `Intersection` — named nodes, incoming-route bookkeeping|
//! | [`lights`]       | `LightCycle` state machine, `LightStep` transitions     |
//! | [`network`]      | `Network` — the owning mutation façade                  |
//! | [`loader`]       | save-format parser/validator and writer                 |
//! | [`error`]        | `NetworkError` taxonomy, `LoadError` fold               |
//!
//! # Error boundaries
//!
//! The mutation API on [`Network`] reports precise error kinds (not-found,
//! state conflict, argument).  The loader recovers every one of those raised
//! while replaying a file through the same API and re-raises it uniformly as
//! [`LoadError::Format`]; only I/O failures pass through unchanged.

pub mod error;
pub mod intersection;
pub mod lights;
pub mod loader;
pub mod network;
pub mod route;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LoadError, LoadResult, NetworkError, NetworkResult};
pub use intersection::Intersection;
pub use lights::{LightCycle, LightStep};
pub use loader::{load_network, load_network_reader, load_network_str, save_network};
pub use network::Network;
pub use route::{Route, SpeedSign};
