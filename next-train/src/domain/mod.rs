//! Domain types for next-train lookups.
//!
//! These types describe routes, stops and directions as the rest of the
//! crate sees them, independent of the MBTA JSON:API wire format. They are
//! built once from API responses and never mutated afterwards.

mod direction;
mod error;
mod ids;
mod route;
mod time;

pub use direction::{BRANCH_TERMINI, Direction, InvalidDirection, forced_direction};
pub use error::LookupError;
pub use ids::{RouteId, StopId};
pub use route::{Route, Stop, normalize_name};
pub use time::Countdown;
