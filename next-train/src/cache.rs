//! Session cache for MBTA stop lists.
//!
//! Stop lists don't change during a run, so each route's stops are fetched
//! at most once and kept in a side table keyed by route id. Entries never
//! expire; the table lives exactly as long as the process.

use std::sync::Arc;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::clock::Clock;
use crate::domain::{Route, RouteId, Stop};
use crate::mbta::{ApiError, MbtaClient, Transport};

/// Cached stop list entry.
type StopsEntry = Arc<Vec<Stop>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of routes whose stops are kept.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 64 }
    }
}

/// MBTA client with a session cache of stop lists.
///
/// Wraps an `MbtaClient`; route and prediction requests pass straight
/// through.
pub struct CachedMbtaClient<T, C> {
    client: MbtaClient<T, C>,
    stops: MokaCache<RouteId, StopsEntry>,
}

impl<T: Transport, C: Clock> CachedMbtaClient<T, C> {
    /// Create a new cached client.
    pub fn new(client: MbtaClient<T, C>, cache_config: &CacheConfig) -> Self {
        let stops = MokaCache::builder()
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { client, stops }
    }

    /// Stops of `route`, from the cache if this route was asked for before.
    pub async fn stops(&self, route: &Route) -> Result<StopsEntry, ApiError> {
        if let Some(cached) = self.stops.get(&route.id).await {
            debug!(route = %route.id, "stop cache hit");
            return Ok(cached);
        }

        debug!(route = %route.id, "stop cache miss");
        let stops = Arc::new(self.client.get_stops(&route.id).await?);
        self.stops.insert(route.id.clone(), stops.clone()).await;

        Ok(stops)
    }

    /// Access the underlying client for requests that bypass the cache.
    pub fn client(&self) -> &MbtaClient<T, C> {
        &self.client
    }
}
