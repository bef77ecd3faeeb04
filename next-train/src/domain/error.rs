//! Domain error types.
//!
//! These errors represent failed name lookups against data already fetched
//! in this session. They are distinct from API/IO errors.

/// A route or stop name did not match anything in the fetched list.
///
/// The display text is what the user sees before the process exits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No route has this display name
    #[error("Route not found")]
    RouteNotFound(String),

    /// No stop on the selected route has this display name
    #[error("Stop not found")]
    StopNotFound(String),
}

impl LookupError {
    /// The name the user asked for, after normalization.
    pub fn requested(&self) -> &str {
        match self {
            LookupError::RouteNotFound(name) | LookupError::StopNotFound(name) => name,
        }
    }
}
