//! Direction of travel and the rules that force it at termini.

use std::fmt;
use std::str::FromStr;

use super::route::{Route, Stop};

/// Error returned when parsing a direction code other than `0` or `1`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {0:?}: expected 0 or 1")]
pub struct InvalidDirection(pub String);

/// One of the two directions a route runs in, as the API's `direction_id`.
///
/// What each direction means is route-specific; the route's
/// `direction_names` say e.g. "South" for `Zero` on the Red Line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Zero,
    One,
}

impl Direction {
    /// Both directions, in id order.
    pub const ALL: [Direction; 2] = [Direction::Zero, Direction::One];

    /// The API `direction_id` (0 or 1).
    pub fn id(self) -> u8 {
        match self {
            Direction::Zero => 0,
            Direction::One => 1,
        }
    }

    /// Index into a route's direction name/destination arrays.
    pub fn index(self) -> usize {
        self.id() as usize
    }

    /// Direction for a 0-based index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Direction::Zero),
            1 => Some(Direction::One),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Direction::Zero),
            "1" => Ok(Direction::One),
            other => Err(InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Stops that end a branch without being first or last in their route's
/// stop array, as `(route name, stop name, direction)`.
///
/// The Red Line forks south of JFK/UMass; the API lists the Ashmont branch
/// in the middle of the sequence, before the Braintree branch.
pub const BRANCH_TERMINI: &[(&str, &str, Direction)] = &[("Red Line", "Ashmont", Direction::One)];

/// The only direction a train can leave `stop` in, if it is a terminus.
///
/// The first stop forces `Zero` and the last forces `One`; on a
/// single-stop route the first-stop rule wins. Branch termini listed in
/// [`BRANCH_TERMINI`] apply when the position rules don't.
///
/// Returns `None` for through stations, where the caller's choice stands.
pub fn forced_direction(route: &Route, stop: &Stop) -> Option<Direction> {
    if stop.is_first() {
        return Some(Direction::Zero);
    }
    if stop.is_last() {
        return Some(Direction::One);
    }
    BRANCH_TERMINI
        .iter()
        .find(|(route_name, stop_name, _)| *route_name == route.name && *stop_name == stop.name)
        .map(|&(_, _, direction)| direction)
}
