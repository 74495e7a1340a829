//! Caching layer for route lookups.
//!
//! Route distances between two places rarely change, and a session that
//! recalculates the same pair (or several sessions asking for a popular
//! pair) should not cost another directions request. Keys are normalized
//! so `" Times Square"` and `"times square"` share an entry.

use std::time::Duration;

use futures::future::BoxFuture;
use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::routing::{RouteLeg, RouteProvider, RouteRequest, RoutingError};

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Route provider with caching.
///
/// Wraps any [`RouteProvider`] and caches successful lookups. Failures are
/// never cached, so a transient outage does not stick.
pub struct CachedRouteProvider<P> {
    inner: P,
    legs: MokaCache<RouteRequest, RouteLeg>,
}

impl<P: RouteProvider> CachedRouteProvider<P> {
    /// Create a new cached provider.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let legs = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, legs }
    }

    /// Look up a route, using the cache if available.
    pub async fn lookup(&self, request: &RouteRequest) -> Result<RouteLeg, RoutingError> {
        let key = request.normalized();

        if let Some(cached) = self.legs.get(&key).await {
            debug!(origin = %request.origin, destination = %request.destination, "route cache hit");
            return Ok(cached);
        }

        let leg = self.inner.first_leg(request).await?;
        self.legs.insert(key, leg.clone()).await;

        Ok(leg)
    }

    /// Access the wrapped provider for lookups that bypass the cache.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.legs.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.legs.invalidate_all();
    }
}

impl<P: RouteProvider> RouteProvider for CachedRouteProvider<P> {
    fn first_leg<'a>(
        &'a self,
        request: &'a RouteRequest,
    ) -> BoxFuture<'a, Result<RouteLeg, RoutingError>> {
        Box::pin(self.lookup(request))
    }
}
