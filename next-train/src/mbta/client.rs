//! MBTA v3 API client.
//!
//! Builds the route, stop and prediction queries and converts the results
//! to domain types. All requests go through the rate-limited [`Gateway`].

use chrono::{DateTime, FixedOffset};
use reqwest::Url;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::domain::{Direction, Route, RouteId, Stop, StopId};

use super::config::MbtaConfig;
use super::convert::{convert_departures, convert_routes, convert_stops};
use super::error::ApiError;
use super::gateway::{Gateway, HttpTransport, Transport};
use super::types::{PredictionAttributes, RouteAttributes, StopAttributes};

/// Route types we care about: 0 = light rail, 1 = heavy rail.
const RAIL_ROUTE_TYPES: &str = "0,1";

/// MBTA API client.
#[derive(Debug, Clone)]
pub struct MbtaClient<T = HttpTransport, C = SystemClock> {
    gateway: Gateway<T, C>,
}

impl MbtaClient {
    /// Create a client for the real API.
    pub fn new(config: MbtaConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(transport, SystemClock, config))
    }
}

impl<T: Transport, C: Clock> MbtaClient<T, C> {
    /// Create a client over any transport and clock.
    pub fn with_transport(transport: T, clock: C, config: MbtaConfig) -> Self {
        Self {
            gateway: Gateway::new(transport, clock, config),
        }
    }

    pub fn clock(&self) -> &C {
        self.gateway.clock()
    }

    /// List the subway and light rail routes.
    pub async fn get_routes(&self) -> Result<Vec<Route>, ApiError> {
        let url = self.url("routes", &[("filter[type]", RAIL_ROUTE_TYPES)])?;
        let data = self.gateway.get_data::<RouteAttributes>(&url).await?;
        let routes = convert_routes(data);
        debug!(count = routes.len(), "fetched routes");
        Ok(routes)
    }

    /// List the stops of a route, in route order.
    pub async fn get_stops(&self, route: &RouteId) -> Result<Vec<Stop>, ApiError> {
        let url = self.url("stops", &[("filter[route]", route.as_str())])?;
        let data = self.gateway.get_data::<StopAttributes>(&url).await?;
        let stops = convert_stops(data);
        debug!(route = %route, count = stops.len(), "fetched stops");
        Ok(stops)
    }

    /// Predicted departure times at a stop in one direction, earliest first.
    pub async fn get_departures(
        &self,
        stop: &StopId,
        direction: Direction,
    ) -> Result<Vec<DateTime<FixedOffset>>, ApiError> {
        let direction_id = direction.id().to_string();
        let url = self.url(
            "predictions",
            &[
                ("filter[stop]", stop.as_str()),
                ("filter[direction_id]", direction_id.as_str()),
                ("filter[route_type]", RAIL_ROUTE_TYPES),
                ("sort", "departure_time"),
            ],
        )?;
        let data = self.gateway.get_data::<PredictionAttributes>(&url).await?;
        Ok(convert_departures(data))
    }

    fn url(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let base = self.gateway.config().base_url.trim_end_matches('/');
        Url::parse_with_params(&format!("{base}/{endpoint}"), query)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }
}
