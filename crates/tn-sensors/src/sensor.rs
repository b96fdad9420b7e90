//! Sensor kinds and the replay-data sensor itself.

use std::fmt;
use std::str::FromStr;

use tn_core::TimedItem;

use crate::SensorError;

// ── SensorKind ────────────────────────────────────────────────────────────────

/// Kind tag distinguishing the three sensor variants.
///
/// Derived `Ord` follows the token alphabet (`PP` < `SC` < `VC`), which is
/// the canonical per-route sensor order in the save format.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// Pressure pad: reading = vehicles currently on the pad.
    PressurePad,
    /// Speed camera: reading = averaged speed of passing vehicles.
    SpeedCamera,
    /// Vehicle count: reading = vehicles per minute past the sensor.
    VehicleCount,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::PressurePad,
        SensorKind::SpeedCamera,
        SensorKind::VehicleCount,
    ];

    /// The two-letter token used in the save format.
    pub fn as_str(self) -> &'static str {
        match self {
            SensorKind::PressurePad  => "PP",
            SensorKind::SpeedCamera  => "SC",
            SensorKind::VehicleCount => "VC",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PP" => Ok(SensorKind::PressurePad),
            "SC" => Ok(SensorKind::SpeedCamera),
            "VC" => Ok(SensorKind::VehicleCount),
            _    => Err(SensorError::UnknownKind(s.to_owned())),
        }
    }
}

// ── Sensor ────────────────────────────────────────────────────────────────────

/// A congestion sensor replaying recorded data.
///
/// `threshold` and `data` are fixed at construction; only the read cursor
/// moves.  Non-negativity of readings and thresholds is guaranteed by the
/// unsigned types.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sensor {
    kind:      SensorKind,
    threshold: u32,
    data:      Vec<u32>,
    cursor:    usize,
}

impl Sensor {
    /// Construct a sensor over its replay data.
    ///
    /// The threshold must be positive and the data non-empty; a sensor with
    /// no recorded values would have no current reading.
    pub fn new(kind: SensorKind, threshold: u32, data: Vec<u32>) -> Result<Self, SensorError> {
        if threshold == 0 {
            return Err(SensorError::ZeroThreshold);
        }
        if data.is_empty() {
            return Err(SensorError::EmptyData);
        }
        Ok(Sensor { kind, threshold, data, cursor: 0 })
    }

    #[inline]
    pub fn kind(&self) -> SensorKind {
        self.kind
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// The raw reading at the current replay position.
    #[inline]
    pub fn current_reading(&self) -> u32 {
        self.data[self.cursor]
    }

    /// Current congestion percentage in `[0, 100]`.
    ///
    /// - Pressure pad: congestion grows with occupancy —
    ///   `round(100 * reading / threshold)`, capped at 100.
    /// - Speed camera: congestion grows as traffic slows below the threshold
    ///   speed — `100 - round(100 * reading / threshold)`, floored at 0.
    /// - Vehicle count: congestion grows as throughput drops below the
    ///   threshold rate — same inverse formula as the speed camera.
    pub fn congestion(&self) -> u8 {
        let pct = percent_of(self.current_reading(), self.threshold);
        let clamped = match self.kind {
            SensorKind::PressurePad => pct.min(100),
            SensorKind::SpeedCamera | SensorKind::VehicleCount => {
                100u64.saturating_sub(pct)
            }
        };
        clamped as u8
    }
}

impl TimedItem for Sensor {
    /// Advance the replay cursor one step, wrapping after the last value.
    fn one_second(&mut self) {
        self.cursor = (self.cursor + 1) % self.data.len();
    }
}

/// `KIND:threshold:v1,v2,...,vN` — the sensor's line in the save format.
impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:", self.kind, self.threshold)?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `round(100 * reading / threshold)` in exact integer arithmetic, half
/// rounding up.
fn percent_of(reading: u32, threshold: u32) -> u64 {
    let (r, t) = (reading as u64, threshold as u64);
    (200 * r + t) / (2 * t)
}
