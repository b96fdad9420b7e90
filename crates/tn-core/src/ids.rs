//! Validated identifier types for intersections and routes.
//!
//! Intersection IDs are user-chosen names that appear verbatim in the save
//! format, so — unlike a dense integer index — validity is a property of the
//! string itself and is checked once, at construction.  An ID may not be
//! empty, may not consist only of whitespace, and may not contain the field
//! separator `:`.
//!
//! `Ord` on both types follows plain string order, so `BTreeMap`s keyed by
//! them iterate in the canonical (alphabetical) order the save format uses.

use std::borrow::Borrow;
use std::fmt;

use thiserror::Error;

// ── InvalidIdError ────────────────────────────────────────────────────────────

/// Rejection reasons for [`IntersectionId::new`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidIdError {
    #[error("intersection id is empty or whitespace-only")]
    Blank,

    #[error("intersection id {0:?} contains ':'")]
    ContainsColon(String),
}

// ── IntersectionId ────────────────────────────────────────────────────────────

/// The validated identifier of an intersection.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionId(String);

impl IntersectionId {
    /// Validate and wrap an identifier string.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidIdError::Blank);
        }
        if id.contains(':') {
            return Err(InvalidIdError::ContainsColon(id));
        }
        Ok(IntersectionId(id))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IntersectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for IntersectionId {
    type Err = InvalidIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IntersectionId::new(s)
    }
}

impl AsRef<str> for IntersectionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Allows `BTreeMap<IntersectionId, _>` lookups by plain `&str`.
impl Borrow<str> for IntersectionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

// ── RouteKey ──────────────────────────────────────────────────────────────────

/// Ordered `(from, to)` pair identifying a directed route.
///
/// At most one route exists per ordered pair; the reverse direction is a
/// distinct key.  Derived `Ord` is lexicographic on `(from, to)`, matching
/// the order route blocks appear in a canonical save file.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteKey {
    pub from: IntersectionId,
    pub to:   IntersectionId,
}

impl RouteKey {
    pub fn new(from: IntersectionId, to: IntersectionId) -> Self {
        RouteKey { from, to }
    }

    /// The same pair in the opposite direction.
    pub fn reversed(&self) -> RouteKey {
        RouteKey {
            from: self.to.clone(),
            to:   self.from.clone(),
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.from, self.to)
    }
}
