//! Network error taxonomy.
//!
//! Three families on [`NetworkError`]: not-found (unknown IDs on lookup or
//! mutation), state conflicts (duplicate route/sensor, missing sign,
//! existing reverse route), and argument errors (malformed IDs, bad
//! durations, invalid light orders).  All are raised at the point of
//! detection and propagate to the immediate caller.
//!
//! [`LoadError`] is the loader boundary: every `NetworkError` folds into
//! `LoadError::Format`, so "file invalid" is a single kind to the loader's
//! callers, while I/O errors pass through as `LoadError::Io`.

use thiserror::Error;

use tn_core::{IntersectionId, InvalidIdError, RouteKey};
use tn_sensors::{SensorError, SensorKind};

// ── NetworkError ──────────────────────────────────────────────────────────────

/// Precise error kinds reported by the [`Network`](crate::Network) mutation API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    // ── Not-found ─────────────────────────────────────────────────────────
    #[error("no intersection with id {0:?}")]
    IntersectionNotFound(String),

    #[error("no route {0}")]
    RouteNotFound(RouteKey),

    // ── State conflicts ───────────────────────────────────────────────────
    #[error("route {0} already exists")]
    DuplicateRoute(RouteKey),

    #[error("reverse route {0} already exists")]
    ReverseRouteExists(RouteKey),

    #[error("route {route} already has a {kind} sensor")]
    DuplicateSensor { route: RouteKey, kind: SensorKind },

    #[error("route {0} has no speed sign")]
    NoSpeedSign(RouteKey),

    #[error("intersection {0} has no traffic lights")]
    NoLights(IntersectionId),

    // ── Arguments ─────────────────────────────────────────────────────────
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),

    #[error("intersection {0} already exists")]
    DuplicateIntersection(IntersectionId),

    #[error("yellow time must be at least 1, got {0}")]
    YellowTimeTooShort(u32),

    #[error("light duration {duration} must exceed yellow time {yellow}")]
    DurationTooShort { duration: u32, yellow: u32 },

    #[error("traffic light order for {0} is empty")]
    EmptyOrder(IntersectionId),

    #[error("light order for {0} is not a permutation of its incoming routes")]
    InvalidOrder(IntersectionId),

    #[error(transparent)]
    Sensor(#[from] SensorError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

// ── LoadError ─────────────────────────────────────────────────────────────────

/// Errors reported by the save-format loader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid network file: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Every precise network error becomes a format error at the loader boundary.
impl From<NetworkError> for LoadError {
    fn from(err: NetworkError) -> Self {
        LoadError::Format(err.to_string())
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
