//! One run's worth of MBTA state.
//!
//! The route list is fetched once when the session starts. Stop lists are
//! fetched on first use and cached per route for the rest of the run.

use std::sync::Arc;

use crate::cache::{CacheConfig, CachedMbtaClient};
use crate::clock::Clock;
use crate::departure;
use crate::domain::{Countdown, Direction, LookupError, Route, Stop};
use crate::mbta::{ApiError, MbtaClient, Transport};

pub struct Session<T, C> {
    client: CachedMbtaClient<T, C>,
    routes: Vec<Route>,
}

impl<T: Transport, C: Clock> Session<T, C> {
    /// Fetch the route list and start a session.
    pub async fn start(
        client: MbtaClient<T, C>,
        cache_config: &CacheConfig,
    ) -> Result<Self, ApiError> {
        let routes = client.get_routes().await?;
        Ok(Self {
            client: CachedMbtaClient::new(client, cache_config),
            routes,
        })
    }

    /// All routes, in API order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Route by (possibly underscored) display name.
    pub fn find_route(&self, name: &str) -> Result<&Route, LookupError> {
        Route::find(&self.routes, name)
    }

    /// Stops of `route`, fetched at most once per session.
    pub async fn stops(&self, route: &Route) -> Result<Arc<Vec<Stop>>, ApiError> {
        self.client.stops(route).await
    }

    /// Time until the next train; see [`departure::next_departure`].
    pub async fn next_departure(
        &self,
        route: &Route,
        stop: &Stop,
        direction: Direction,
    ) -> Result<Option<Countdown>, ApiError> {
        departure::next_departure(self.client.client(), route, stop, direction).await
    }
}
