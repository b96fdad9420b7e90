//! `tn-sensors` — congestion sensors for the trafficnet workspace.
//!
//! A sensor replays a fixed sequence of recorded raw readings, advancing one
//! position per simulated second with wraparound.  Its congestion value is a
//! pure function of the sensor kind, the current reading, and a fixed
//! threshold, always clamped to `[0, 100]`.
//!
//! Kind dispatch is a tagged variant ([`SensorKind`]), not a trait object:
//! the three kinds differ only in one arithmetic formula.

pub mod congestion;
pub mod error;
pub mod sensor;


pub use congestion::average_congestion;
pub use error::SensorError;
pub use sensor::{Sensor, SensorKind};
