//! Intersections: named nodes with incoming-route bookkeeping.

use std::fmt;

use tn_core::{IntersectionId, RouteKey};

use crate::LightCycle;

/// A named node in the network graph.
///
/// Tracks its incoming routes in the order connections were added and owns
/// at most one light cycle.  Created only through
/// `Network::create_intersection`; lives as long as its network.
#[derive(Clone, Debug)]
pub struct Intersection {
    id:       IntersectionId,
    /// Incoming routes, insertion order.
    incoming: Vec<RouteKey>,
    lights:   Option<LightCycle>,
}

impl Intersection {
    pub(crate) fn new(id: IntersectionId) -> Self {
        Intersection {
            id,
            incoming: Vec::new(),
            lights: None,
        }
    }

    #[inline]
    pub fn id(&self) -> &IntersectionId {
        &self.id
    }

    /// Keys of all incoming routes, in the order they were connected.
    pub fn incoming(&self) -> &[RouteKey] {
        &self.incoming
    }

    pub fn has_lights(&self) -> bool {
        self.lights.is_some()
    }

    pub fn lights(&self) -> Option<&LightCycle> {
        self.lights.as_ref()
    }

    pub(crate) fn lights_mut(&mut self) -> Option<&mut LightCycle> {
        self.lights.as_mut()
    }

    pub(crate) fn push_incoming(&mut self, key: RouteKey) {
        self.incoming.push(key);
    }

    /// Install a new light cycle, returning the replaced one (which thereby
    /// stops ticking).
    pub(crate) fn set_lights(&mut self, cycle: LightCycle) -> Option<LightCycle> {
        self.lights.replace(cycle)
    }
}

/// The intersection's line in the save format: its bare ID, or
/// `id:duration:from1,from2,...` when it has traffic lights.
impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lights {
            Some(cycle) => write!(f, "{}:{cycle}", self.id),
            None => write!(f, "{}", self.id),
        }
    }
}
