//! The `Network` mutation façade.
//!
//! # Data layout
//!
//! Intersections and routes live in `BTreeMap`s keyed by their validated
//! identifiers.  Map iteration is therefore always in canonical
//! (alphabetical) order, which makes serialization stable and equality
//! independent of insertion order by construction.  The route map and each
//! intersection's incoming list are kept consistent by every mutation.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};

use rustc_hash::FxHashSet;

use tn_core::{IntersectionId, RouteKey, TimedItem, TrafficSignal};
use tn_sensors::Sensor;

use crate::{Intersection, LightCycle, LightStep, NetworkError, NetworkResult, Route};

/// A traffic network: intersections, directional routes, and one shared
/// yellow time applied to every light cycle created after it is set.
#[derive(Clone, Debug)]
pub struct Network {
    intersections: BTreeMap<IntersectionId, Intersection>,
    routes:        BTreeMap<RouteKey, Route>,
    yellow_time:   u32,
}

impl Network {
    /// An empty network.  The yellow time starts at 1, its minimum valid
    /// value.
    pub fn new() -> Self {
        Network {
            intersections: BTreeMap::new(),
            routes:        BTreeMap::new(),
            yellow_time:   1,
        }
    }

    // ── Yellow time ───────────────────────────────────────────────────────

    #[inline]
    pub fn yellow_time(&self) -> u32 {
        self.yellow_time
    }

    /// Set the yellow time used by light cycles created from now on.
    /// Existing cycles keep the yellow time they were built with.
    pub fn set_yellow_time(&mut self, yellow_time: u32) -> NetworkResult<()> {
        if yellow_time < 1 {
            return Err(NetworkError::YellowTimeTooShort(yellow_time));
        }
        self.yellow_time = yellow_time;
        Ok(())
    }

    // ── Intersections ─────────────────────────────────────────────────────

    /// Create a new intersection with the given (validated) identifier.
    pub fn create_intersection(&mut self, id: &str) -> NetworkResult<()> {
        let id = IntersectionId::new(id)?;
        if self.intersections.contains_key(&id) {
            return Err(NetworkError::DuplicateIntersection(id));
        }
        self.intersections.insert(id.clone(), Intersection::new(id));
        Ok(())
    }

    pub fn find_intersection(&self, id: &str) -> NetworkResult<&Intersection> {
        self.intersections
            .get(id)
            .ok_or_else(|| NetworkError::IntersectionNotFound(id.to_owned()))
    }

    /// Intersections in ID order.
    pub fn intersections(&self) -> impl Iterator<Item = &Intersection> {
        self.intersections.values()
    }

    pub fn intersection_count(&self) -> usize {
        self.intersections.len()
    }

    // ── Routes ────────────────────────────────────────────────────────────

    /// Connect `from` to `to` with a new directed route.
    ///
    /// At most one route exists per ordered pair; the reverse direction is a
    /// separate route created by [`make_two_way`](Self::make_two_way) or a
    /// second `connect`.
    pub fn connect(&mut self, from: &str, to: &str, default_speed: u32) -> NetworkResult<()> {
        let from_id = self.find_intersection(from)?.id().clone();
        let to_id = self.find_intersection(to)?.id().clone();
        let key = RouteKey::new(from_id, to_id);
        if self.routes.contains_key(&key) {
            return Err(NetworkError::DuplicateRoute(key));
        }
        self.insert_route(Route::new(key.clone(), default_speed), key);
        Ok(())
    }

    /// Create the reverse of an existing route.
    ///
    /// The new route's default speed is the existing route's *current*
    /// effective speed, and an existing speed sign is mirrored with the same
    /// displayed value.  A self-loop is its own reverse, so it cannot be
    /// made two-way.
    pub fn make_two_way(&mut self, from: &str, to: &str) -> NetworkResult<()> {
        let existing = self.route(from, to)?;
        let reverse = existing.key().reversed();
        let speed = existing.speed();
        let signed = existing.has_speed_sign();
        if self.routes.contains_key(&reverse) {
            return Err(NetworkError::ReverseRouteExists(reverse));
        }
        let mut route = Route::new(reverse.clone(), speed);
        if signed {
            route.add_speed_sign(speed);
        }
        self.insert_route(route, reverse);
        Ok(())
    }

    /// Insert a validated route and record it on its destination's incoming
    /// list, keeping both structures consistent.
    fn insert_route(&mut self, route: Route, key: RouteKey) {
        self.routes.insert(key.clone(), route);
        if let Some(inter) = self.intersections.get_mut(key.to.as_str()) {
            inter.push_incoming(key);
        }
    }

    /// Look up the route connecting the two intersections.
    ///
    /// Both endpoints are resolved first, so an unknown intersection reports
    /// as not-found even when no route would match either.
    pub fn route(&self, from: &str, to: &str) -> NetworkResult<&Route> {
        let from_id = self.find_intersection(from)?.id().clone();
        let to_id = self.find_intersection(to)?.id().clone();
        let key = RouteKey::new(from_id, to_id);
        self.routes.get(&key).ok_or(NetworkError::RouteNotFound(key))
    }

    fn route_mut(&mut self, from: &str, to: &str) -> NetworkResult<&mut Route> {
        let from_id = self.find_intersection(from)?.id().clone();
        let to_id = self.find_intersection(to)?.id().clone();
        let key = RouteKey::new(from_id, to_id);
        self.routes
            .get_mut(&key)
            .ok_or(NetworkError::RouteNotFound(key))
    }

    /// Routes in `(from, to)` key order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.values()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    // ── Speed signs ───────────────────────────────────────────────────────

    /// Install an electronic speed sign on the route, displaying
    /// `initial_speed`.
    pub fn add_speed_sign(&mut self, from: &str, to: &str, initial_speed: u32) -> NetworkResult<()> {
        self.route_mut(from, to)?.add_speed_sign(initial_speed);
        Ok(())
    }

    /// Change the speed limit on a route.  Only routes with an electronic
    /// sign can change their limit.
    pub fn set_speed_limit(&mut self, from: &str, to: &str, new_limit: u32) -> NetworkResult<()> {
        self.route_mut(from, to)?.set_speed_limit(new_limit)
    }

    /// The route's current effective speed limit.
    pub fn speed(&self, from: &str, to: &str) -> NetworkResult<u32> {
        Ok(self.route(from, to)?.speed())
    }

    // ── Sensors & congestion ──────────────────────────────────────────────

    /// Attach a sensor to the route.  Duplicate kinds are rejected.
    pub fn add_sensor(&mut self, from: &str, to: &str, sensor: Sensor) -> NetworkResult<()> {
        self.route_mut(from, to)?.add_sensor(sensor)
    }

    /// Averaged congestion of the route's sensors, in `[0, 100]`.
    pub fn congestion(&self, from: &str, to: &str) -> NetworkResult<u8> {
        Ok(self.route(from, to)?.congestion())
    }

    // ── Traffic lights ────────────────────────────────────────────────────

    /// Attach (or wholesale replace) traffic lights at an intersection.
    ///
    /// `order` lists the origin IDs of the intersection's incoming routes in
    /// the sequence they are to go green; it must be an exact permutation of
    /// all of them.  The cycle uses the network's current yellow time, and
    /// `duration` must exceed it.  On success the first route in the order
    /// shows green and the rest red; routes controlled only by a replaced
    /// cycle lose their signal.
    pub fn add_lights<S: AsRef<str>>(
        &mut self,
        intersection_id: &str,
        duration: u32,
        order: &[S],
    ) -> NetworkResult<()> {
        let target = self.find_intersection(intersection_id)?;
        let target_id = target.id().clone();
        if order.is_empty() {
            return Err(NetworkError::EmptyOrder(target_id));
        }
        if duration < self.yellow_time + 1 {
            return Err(NetworkError::DurationTooShort {
                duration,
                yellow: self.yellow_time,
            });
        }

        // The order must map onto the incoming routes exactly: same length,
        // no repeated origin, no unknown origin.
        let incoming = target.incoming();
        if order.len() != incoming.len() {
            return Err(NetworkError::InvalidOrder(target_id));
        }
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut slots = Vec::with_capacity(order.len());
        for origin in order {
            let origin = origin.as_ref();
            if !seen.insert(origin) {
                return Err(NetworkError::InvalidOrder(target_id));
            }
            match incoming.iter().find(|key| key.from.as_str() == origin) {
                Some(key) => slots.push(key.clone()),
                None => return Err(NetworkError::InvalidOrder(target_id)),
            }
        }

        let cycle = LightCycle::new(slots, self.yellow_time, duration);
        let initial: Vec<(RouteKey, TrafficSignal)> = cycle
            .initial_signals()
            .map(|(key, signal)| (key.clone(), signal))
            .collect();

        let replaced = match self.intersections.get_mut(intersection_id) {
            Some(inter) => inter.set_lights(cycle),
            None => return Err(NetworkError::IntersectionNotFound(intersection_id.to_owned())),
        };

        // A signal exists only while its route is under light control.
        if let Some(old) = replaced {
            for key in old.slots() {
                if let Some(route) = self.routes.get_mut(key) {
                    route.clear_signal();
                }
            }
        }
        for (key, signal) in initial {
            if let Some(route) = self.routes.get_mut(&key) {
                route.set_signal(signal);
            }
        }
        Ok(())
    }

    /// Change an intersection's light-cycle duration.
    ///
    /// The cycle's phase restarts; an in-progress yellow reverts to green.
    pub fn change_light_duration(&mut self, intersection_id: &str, duration: u32) -> NetworkResult<()> {
        let inter = match self.intersections.get_mut(intersection_id) {
            Some(inter) => inter,
            None => return Err(NetworkError::IntersectionNotFound(intersection_id.to_owned())),
        };
        let id = inter.id().clone();
        let lights = match inter.lights_mut() {
            Some(lights) => lights,
            None => return Err(NetworkError::NoLights(id)),
        };
        let yellow = lights.yellow_time();
        if duration < yellow + 1 {
            return Err(NetworkError::DurationTooShort { duration, yellow });
        }
        let regreen = lights.set_duration(duration);
        if let Some(key) = regreen {
            if let Some(route) = self.routes.get_mut(&key) {
                route.set_signal(TrafficSignal::Green);
            }
        }
        Ok(())
    }

    // ── Equality renderings ───────────────────────────────────────────────

    /// One string per intersection: its own line plus its incoming route
    /// blocks in canonical key order.  Every route belongs to exactly one
    /// intersection's incoming list, so the renderings jointly cover the
    /// whole graph (yellow time excepted).
    fn renderings(&self) -> Vec<String> {
        self.intersections
            .values()
            .map(|inter| {
                let mut text = inter.to_string();
                let mut keys: Vec<&RouteKey> = inter.incoming().iter().collect();
                keys.sort();
                for key in keys {
                    if let Some(route) = self.routes.get(key) {
                        text.push('\n');
                        text.push_str(&route.to_string());
                    }
                }
                text
            })
            .collect()
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

impl TimedItem for Network {
    /// Advance one simulated second: every light cycle first (applying its
    /// signal step to the affected routes), then every sensor.
    fn one_second(&mut self) {
        for inter in self.intersections.values_mut() {
            let Some(lights) = inter.lights_mut() else {
                continue;
            };
            match lights.one_second() {
                LightStep::None => {}
                LightStep::TurnYellow(key) => {
                    if let Some(route) = self.routes.get_mut(&key) {
                        route.set_signal(TrafficSignal::Yellow);
                    }
                }
                LightStep::Advance { stop, go } => {
                    if let Some(route) = self.routes.get_mut(&stop) {
                        route.set_signal(TrafficSignal::Red);
                    }
                    if let Some(route) = self.routes.get_mut(&go) {
                        route.set_signal(TrafficSignal::Green);
                    }
                }
            }
        }
        for route in self.routes.values_mut() {
            route.one_second();
        }
    }
}

/// Two networks are equal iff their intersections — rendered with their
/// incoming routes and sensors — are equal as sets.  Insertion order never
/// matters; any difference in IDs, lights, routes, or sensor data does.
impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.renderings() == other.renderings()
    }
}

impl Eq for Network {}

/// Order-independent: the wrapping sum of the per-intersection rendering
/// hashes, so equal networks hash equally regardless of build order.
impl Hash for Network {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum = 0u64;
        for rendering in self.renderings() {
            let mut hasher = DefaultHasher::new();
            rendering.hash(&mut hasher);
            sum = sum.wrapping_add(hasher.finish());
        }
        state.write_u64(sum);
    }
}

/// The complete save-format text: three header lines, then intersections in
/// ID order, then route blocks in key order, one trailing newline per line.
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.intersections.len())?;
        writeln!(f, "{}", self.routes.len())?;
        writeln!(f, "{}", self.yellow_time)?;
        for inter in self.intersections.values() {
            writeln!(f, "{inter}")?;
        }
        for route in self.routes.values() {
            writeln!(f, "{route}")?;
        }
        Ok(())
    }
}
