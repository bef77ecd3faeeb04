//! Identifier types for MBTA resources.

use std::fmt;

/// An MBTA route identifier, e.g. `Red` or `Green-B`.
///
/// Route ids are opaque to us: they are whatever the `/routes` endpoint
/// returned, and are only ever handed back to the API in filters.
///
/// # Examples
///
/// ```
/// use next_train::domain::RouteId;
///
/// let red = RouteId::new("Red");
/// assert_eq!(red.as_str(), "Red");
/// assert_eq!(red.to_string(), "Red");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteId(String);

impl RouteId {
    /// Wrap a raw route id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the route id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An MBTA stop identifier, e.g. `place-pktrm`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Wrap a raw stop id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
