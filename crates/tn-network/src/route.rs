//! Directed routes and electronic speed signs.

use std::collections::{btree_map, BTreeMap};
use std::fmt;

use tn_core::{IntersectionId, RouteKey, TimedItem, TrafficSignal};
use tn_sensors::{average_congestion, Sensor, SensorKind};

use crate::{NetworkError, NetworkResult};

// ── SpeedSign ─────────────────────────────────────────────────────────────────

/// Electronic speed sign: a mutable override of the route's posted limit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedSign {
    displayed: u32,
}

impl SpeedSign {
    pub fn new(displayed: u32) -> Self {
        SpeedSign { displayed }
    }

    #[inline]
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    pub fn set(&mut self, speed: u32) {
        self.displayed = speed;
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A directed edge between two intersections.
///
/// Endpoints and default speed are fixed at creation.  The signal slot is
/// populated only while the route is governed by an intersection's light
/// cycle.  Sensors are keyed by kind — at most one per kind — and the
/// `BTreeMap` keeps them in canonical token order for serialization.
#[derive(Clone, Debug)]
pub struct Route {
    key:           RouteKey,
    default_speed: u32,
    sign:          Option<SpeedSign>,
    signal:        Option<TrafficSignal>,
    sensors:       BTreeMap<SensorKind, Sensor>,
}

impl Route {
    pub(crate) fn new(key: RouteKey, default_speed: u32) -> Self {
        Route {
            key,
            default_speed,
            sign: None,
            signal: None,
            sensors: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn key(&self) -> &RouteKey {
        &self.key
    }

    #[inline]
    pub fn from(&self) -> &IntersectionId {
        &self.key.from
    }

    #[inline]
    pub fn to(&self) -> &IntersectionId {
        &self.key.to
    }

    #[inline]
    pub fn default_speed(&self) -> u32 {
        self.default_speed
    }

    // ── Speed sign ────────────────────────────────────────────────────────

    /// Current effective speed limit: the sign's displayed speed if one is
    /// present, otherwise the default speed.
    pub fn speed(&self) -> u32 {
        match &self.sign {
            Some(sign) => sign.displayed(),
            None => self.default_speed,
        }
    }

    pub fn has_speed_sign(&self) -> bool {
        self.sign.is_some()
    }

    pub fn speed_sign(&self) -> Option<&SpeedSign> {
        self.sign.as_ref()
    }

    /// Install (or replace) the electronic speed sign.
    pub fn add_speed_sign(&mut self, displayed: u32) {
        self.sign = Some(SpeedSign::new(displayed));
    }

    /// Change the displayed speed.  Fails on a route without a sign.
    pub fn set_speed_limit(&mut self, new_limit: u32) -> NetworkResult<()> {
        match &mut self.sign {
            Some(sign) => {
                sign.set(new_limit);
                Ok(())
            }
            None => Err(NetworkError::NoSpeedSign(self.key.clone())),
        }
    }

    // ── Traffic signal ────────────────────────────────────────────────────

    pub fn signal(&self) -> Option<TrafficSignal> {
        self.signal
    }

    pub(crate) fn set_signal(&mut self, signal: TrafficSignal) {
        self.signal = Some(signal);
    }

    pub(crate) fn clear_signal(&mut self) {
        self.signal = None;
    }

    // ── Sensors ───────────────────────────────────────────────────────────

    /// Sensors in canonical kind order.
    pub fn sensors(&self) -> impl Iterator<Item = &Sensor> {
        self.sensors.values()
    }

    pub fn sensor(&self, kind: SensorKind) -> Option<&Sensor> {
        self.sensors.get(&kind)
    }

    pub fn sensor_count(&self) -> usize {
        self.sensors.len()
    }

    /// Attach a sensor.  At most one sensor per kind may exist on a route.
    pub fn add_sensor(&mut self, sensor: Sensor) -> NetworkResult<()> {
        match self.sensors.entry(sensor.kind()) {
            btree_map::Entry::Occupied(_) => Err(NetworkError::DuplicateSensor {
                route: self.key.clone(),
                kind:  sensor.kind(),
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(sensor);
                Ok(())
            }
        }
    }

    /// Averaged congestion over this route's sensors, 0 when it has none.
    pub fn congestion(&self) -> u8 {
        average_congestion(self.sensors.values())
    }
}

impl TimedItem for Route {
    /// Advance every sensor's replay cursor one step.
    fn one_second(&mut self) {
        for sensor in self.sensors.values_mut() {
            sensor.one_second();
        }
    }
}

/// `from:to:defaultSpeed:numSensors[:speedSignSpeed]` followed by one line
/// per sensor, kinds in alphabetical token order.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.key.from,
            self.key.to,
            self.default_speed,
            self.sensors.len()
        )?;
        if let Some(sign) = &self.sign {
            write!(f, ":{}", sign.displayed())?;
        }
        for sensor in self.sensors.values() {
            write!(f, "\n{sensor}")?;
        }
        Ok(())
    }
}
