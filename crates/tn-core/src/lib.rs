//! `tn-core` — foundational types for the `trafficnet` workspace.
//!
//! This crate is a dependency of every other `tn-*` crate.  It intentionally
//! has no `tn-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                           |
//! |-------------|----------------------------------------------------|
//! | [`ids`]     | `IntersectionId` (validated), `RouteKey`           |
//! | [`signal`]  | `TrafficSignal` enum                               |
//! | [`tick`]    | `Tick`, the `TimedItem` trait                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod signal;
pub mod tick;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{IntersectionId, InvalidIdError, RouteKey};
pub use signal::TrafficSignal;
pub use tick::{Tick, TimedItem};
