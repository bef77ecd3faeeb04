//! Conversion from MBTA DTOs to domain types.

use chrono::{DateTime, FixedOffset};
use tracing::warn;

use crate::domain::{Route, RouteId, Stop, StopId};

use super::types::{PredictionAttributes, Resource, RouteAttributes, StopAttributes};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Routes must run in exactly two directions
    #[error("route {route} has {count} directions, expected 2")]
    DirectionCount { route: String, count: usize },

    /// Failed to parse a departure timestamp
    #[error("invalid departure time: {0}")]
    InvalidTime(String),
}

/// Convert route resources, skipping any that don't fit the domain model.
pub fn convert_routes(resources: Vec<Resource<RouteAttributes>>) -> Vec<Route> {
    let mut routes = Vec::with_capacity(resources.len());

    for resource in resources {
        match convert_route(resource) {
            Ok(route) => routes.push(route),
            Err(e) => warn!("skipping route: {e}"),
        }
    }

    routes
}

/// Convert a single route resource.
pub fn convert_route(resource: Resource<RouteAttributes>) -> Result<Route, ConversionError> {
    let Resource { id, attributes } = resource;

    let direction_names = two_directions(&id, attributes.direction_names)?;
    let direction_destinations = two_directions(&id, attributes.direction_destinations)?;

    Ok(Route {
        id: RouteId::new(id),
        name: attributes.long_name,
        direction_names,
        direction_destinations,
    })
}

fn two_directions(
    route: &str,
    values: Vec<Option<String>>,
) -> Result<[String; 2], ConversionError> {
    let count = values.len();
    match <[Option<String>; 2]>::try_from(values) {
        Ok([zero, one]) => Ok([zero.unwrap_or_default(), one.unwrap_or_default()]),
        Err(_) => Err(ConversionError::DirectionCount {
            route: route.to_string(),
            count,
        }),
    }
}

/// Convert stop resources into a route's ordered stop sequence.
pub fn convert_stops(resources: Vec<Resource<StopAttributes>>) -> Vec<Stop> {
    Stop::sequence(
        resources
            .into_iter()
            .map(|r| (StopId::new(r.id), r.attributes.name)),
    )
}

/// Extract departure times from predictions, earliest first.
///
/// Predictions without a departure time are dropped; unparseable ones are
/// logged and dropped.
pub fn convert_departures(
    resources: Vec<Resource<PredictionAttributes>>,
) -> Vec<DateTime<FixedOffset>> {
    let mut departures: Vec<DateTime<FixedOffset>> = resources
        .into_iter()
        .filter_map(|r| {
            let raw = r.attributes.departure_time?;
            match parse_departure(&raw) {
                Ok(time) => Some(time),
                Err(e) => {
                    warn!(prediction = %r.id, "skipping prediction: {e}");
                    None
                }
            }
        })
        .collect();

    departures.sort();
    departures
}

fn parse_departure(raw: &str) -> Result<DateTime<FixedOffset>, ConversionError> {
    DateTime::parse_from_rfc3339(raw).map_err(|_| ConversionError::InvalidTime(raw.to_string()))
}
