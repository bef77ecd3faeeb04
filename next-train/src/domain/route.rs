//! Routes and the stops along them.

use super::direction::Direction;
use super::error::LookupError;
use super::ids::{RouteId, StopId};

/// Convert a command-line name to a display name.
///
/// Names on the command line use `_` in place of spaces so each fits in a
/// single argument: `Park_Street` becomes `Park Street`.
pub fn normalize_name(name: &str) -> String {
    name.replace('_', " ")
}

/// A rail route as listed by the `/routes` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub id: RouteId,
    /// Human-readable name, e.g. "Red Line".
    pub name: String,
    /// Direction names indexed by direction id, e.g. `["South", "North"]`.
    pub direction_names: [String; 2],
    /// Destinations indexed by direction id, e.g. `["Ashmont/Braintree", "Alewife"]`.
    pub direction_destinations: [String; 2],
}

impl Route {
    /// Find a route by display name.
    ///
    /// `name` is normalized first, so `Red_Line` finds "Red Line".
    pub fn find<'a>(routes: &'a [Route], name: &str) -> Result<&'a Route, LookupError> {
        let wanted = normalize_name(name);
        routes
            .iter()
            .find(|r| r.name == wanted)
            .ok_or(LookupError::RouteNotFound(wanted))
    }

    /// Name of the given direction, e.g. "South".
    pub fn direction_name(&self, direction: Direction) -> &str {
        &self.direction_names[direction.index()]
    }

    /// Destination of the given direction, e.g. "Alewife".
    pub fn direction_destination(&self, direction: Direction) -> &str {
        &self.direction_destinations[direction.index()]
    }

    /// "South - Ashmont/Braintree", as shown in menus.
    pub fn direction_label(&self, direction: Direction) -> String {
        format!(
            "{} - {}",
            self.direction_name(direction),
            self.direction_destination(direction)
        )
    }
}

/// A stop within one route's stop sequence.
///
/// The position is tied to the route the stop list was fetched for: the
/// same station has a different position on each route serving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub id: StopId,
    pub name: String,
    /// 1-based ordinal position in the route's stop sequence.
    pub position: usize,
    /// Number of stops on the route.
    pub total: usize,
}

impl Stop {
    /// Build the stop sequence for a route from `(id, name)` pairs in API order.
    pub fn sequence<I>(stops: I) -> Vec<Stop>
    where
        I: IntoIterator<Item = (StopId, String)>,
        I::IntoIter: ExactSizeIterator,
    {
        let stops = stops.into_iter();
        let total = stops.len();
        stops
            .enumerate()
            .map(|(i, (id, name))| Stop {
                id,
                name,
                position: i + 1,
                total,
            })
            .collect()
    }

    /// Find a stop by display name; `Park_Street` finds "Park Street".
    pub fn find<'a>(stops: &'a [Stop], name: &str) -> Result<&'a Stop, LookupError> {
        let wanted = normalize_name(name);
        stops
            .iter()
            .find(|s| s.name == wanted)
            .ok_or(LookupError::StopNotFound(wanted))
    }

    /// Whether this is the first stop of the sequence.
    pub fn is_first(&self) -> bool {
        self.position == 1
    }

    /// Whether this is the last stop of the sequence.
    pub fn is_last(&self) -> bool {
        self.position == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_line() -> Route {
        Route {
            id: RouteId::new("Red"),
            name: "Red Line".to_string(),
            direction_names: ["South".to_string(), "North".to_string()],
            direction_destinations: ["Ashmont/Braintree".to_string(), "Alewife".to_string()],
        }
    }

    fn stops() -> Vec<Stop> {
        Stop::sequence(
            [
                ("place-alfcl", "Alewife"),
                ("place-pktrm", "Park Street"),
                ("place-brntn", "Braintree"),
            ]
            .map(|(id, name)| (StopId::new(id), name.to_string())),
        )
    }

    #[test]
    fn normalize_replaces_underscores() {
        assert_eq!(normalize_name("Park_Street"), "Park Street");
        assert_eq!(normalize_name("Green_Line_B"), "Green Line B");
        assert_eq!(normalize_name("Kendall/MIT"), "Kendall/MIT");
    }

    #[test]
    fn sequence_assigns_positions() {
        let stops = stops();
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].position, 1);
        assert_eq!(stops[2].position, 3);
        assert!(stops.iter().all(|s| s.total == 3));
        assert!(stops[0].is_first());
        assert!(stops[2].is_last());
        assert!(!stops[1].is_first() && !stops[1].is_last());
    }

    #[test]
    fn find_stop_with_underscores() {
        let stops = stops();
        let by_underscore = Stop::find(&stops, "Park_Street").unwrap();
        let by_space = Stop::find(&stops, "Park Street").unwrap();
        assert_eq!(by_underscore, by_space);
        assert_eq!(by_underscore.id, StopId::new("place-pktrm"));
    }

    #[test]
    fn find_stop_missing() {
        let stops = stops();
        let err = Stop::find(&stops, "Harvard").unwrap_err();
        assert_eq!(err, LookupError::StopNotFound("Harvard".to_string()));
    }

    #[test]
    fn find_route_exact_match_only() {
        let routes = vec![red_line()];
        assert!(Route::find(&routes, "Red_Line").is_ok());
        assert!(Route::find(&routes, "red line").is_err());
        assert!(Route::find(&routes, "Red").is_err());
    }

    #[test]
    fn direction_label() {
        let route = red_line();
        assert_eq!(route.direction_label(Direction::Zero), "South - Ashmont/Braintree");
        assert_eq!(route.direction_label(Direction::One), "North - Alewife");
    }
}
