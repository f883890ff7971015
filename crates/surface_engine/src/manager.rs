//! Cached, coalescing front-end over the grid evaluator.
//!
//! The manager guarantees two things under concurrency:
//! - a request whose tensor is cached never prices anything
//! - N threads asking for the same uncached tensor trigger exactly one
//!   evaluation; the first caller computes, the rest block on a condvar
//!   and receive the shared result (or the shared error)
//!
//! The coalescing map and the LRU cache live behind one mutex, held only
//! for map operations, never across an evaluation.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};

use surface_core::{GreekKind, RequestKey, SurfaceRequest};

use crate::cache::LruCache;
use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::evaluate::evaluate_surface;
use crate::tensor::{GreekSurfaces, SurfaceTensor};

/// Counters describing manager activity since construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStats {
    /// Requests served straight from the cache.
    pub hits: u64,
    /// Requests that found neither a cached tensor nor an in-flight
    /// evaluation and priced one themselves.
    pub misses: u64,
    /// Requests that piggybacked on another caller's in-flight evaluation.
    pub coalesced: u64,
    /// Tensors evicted by the LRU policy.
    pub evictions: u64,
    /// Evaluations actually run.
    pub evaluations: u64,
}

/// Rendezvous for callers waiting on one in-flight evaluation.
#[derive(Default)]
struct InFlight {
    done: Mutex<Option<Result<Arc<SurfaceTensor>, EngineError>>>,
    cond: Condvar,
}

struct Inner {
    cache: LruCache<RequestKey, Arc<SurfaceTensor>>,
    inflight: HashMap<RequestKey, Arc<InFlight>>,
    stats: EngineStats,
}

/// What the lookup phase decided for one request.
enum Role {
    Hit(Arc<SurfaceTensor>),
    Wait(Arc<InFlight>),
    Lead(Arc<InFlight>),
}

/// Thread-safe surface manager: cache, coalescing and (optionally) a
/// dedicated rayon pool.
///
/// Shared by reference (or inside an `Arc`) across as many threads as
/// needed; all methods take `&self`.
pub struct SurfaceManager {
    inner: Mutex<Inner>,
    pool: Option<rayon::ThreadPool>,
}

impl SurfaceManager {
    /// Manager from a validated configuration.
    ///
    /// With `threads` set, evaluations run on a dedicated rayon pool of
    /// that size; otherwise they use the process-global pool.
    ///
    /// # Errors
    /// [`ConfigError`] if the configuration is invalid or the dedicated
    /// pool cannot be built.
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let pool = match config.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("surface-worker-{i}"))
                    .build()?,
            ),
            None => None,
        };
        info!(
            cache_capacity = config.cache_capacity,
            threads = config.effective_threads(),
            dedicated_pool = pool.is_some(),
            "surface manager ready"
        );
        Ok(Self {
            inner: Mutex::new(Inner {
                cache: LruCache::new(config.cache_capacity),
                inflight: HashMap::new(),
                stats: EngineStats::default(),
            }),
            pool,
        })
    }

    /// Manager with the given cache capacity and the global rayon pool.
    pub fn with_capacity(cache_capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                cache: LruCache::new(cache_capacity),
                inflight: HashMap::new(),
                stats: EngineStats::default(),
            }),
            pool: None,
        }
    }

    /// The full tensor for a request, from cache or by evaluation.
    ///
    /// # Errors
    /// [`EngineError`] from the evaluation; coalesced waiters receive a
    /// clone of the leader's error.
    pub fn get_tensor(&self, request: &SurfaceRequest) -> Result<Arc<SurfaceTensor>, EngineError> {
        let key = request.fingerprint();
        let role = {
            let mut inner = self.lock_inner();
            // Clone out of the maps before touching the counters so no
            // borrow of `inner` outlives the lookup.
            if let Some(tensor) = inner.cache.get(&key).map(Arc::clone) {
                inner.stats.hits += 1;
                Role::Hit(tensor)
            } else if let Some(flight) = inner.inflight.get(&key).map(Arc::clone) {
                inner.stats.coalesced += 1;
                Role::Wait(flight)
            } else {
                inner.stats.misses += 1;
                let flight = Arc::new(InFlight::default());
                inner.inflight.insert(key.clone(), Arc::clone(&flight));
                Role::Lead(flight)
            }
        };

        match role {
            Role::Hit(tensor) => {
                debug!("cache hit");
                Ok(tensor)
            }
            Role::Wait(flight) => {
                debug!("coalescing onto in-flight evaluation");
                self.wait_for(&flight)
            }
            Role::Lead(flight) => self.lead_evaluation(request, &key, &flight),
        }
    }

    /// One measure across all four option variants.
    ///
    /// The tensor is computed (or fetched) whole, so asking for a second
    /// Greek against the same request is a cache hit.
    ///
    /// # Errors
    /// [`EngineError`] from the underlying tensor evaluation.
    pub fn get_greek(
        &self,
        request: &SurfaceRequest,
        greek: GreekKind,
    ) -> Result<GreekSurfaces, EngineError> {
        let tensor = self.get_tensor(request)?;
        Ok(tensor.surfaces_for(greek))
    }

    /// Activity counters since construction.
    pub fn stats(&self) -> EngineStats {
        self.lock_inner().stats
    }

    /// Current number of cached tensors.
    pub fn cached_tensors(&self) -> usize {
        self.lock_inner().cache.len()
    }

    fn lead_evaluation(
        &self,
        request: &SurfaceRequest,
        key: &RequestKey,
        flight: &Arc<InFlight>,
    ) -> Result<Arc<SurfaceTensor>, EngineError> {
        let result = match &self.pool {
            Some(pool) => pool.install(|| evaluate_surface(request)),
            None => evaluate_surface(request),
        }
        .map(Arc::new);

        {
            let mut inner = self.lock_inner();
            inner.stats.evaluations += 1;
            if let Ok(tensor) = &result {
                if inner.cache.insert(key.clone(), Arc::clone(tensor)).is_some() {
                    inner.stats.evictions += 1;
                }
            }
            // Errors are not cached: a later retry re-evaluates.
            inner.inflight.remove(key);
        }

        let mut done = flight
            .done
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *done = Some(result.clone());
        drop(done);
        flight.cond.notify_all();

        result
    }

    fn wait_for(&self, flight: &Arc<InFlight>) -> Result<Arc<SurfaceTensor>, EngineError> {
        let mut done = flight
            .done
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        loop {
            if let Some(result) = done.as_ref() {
                return result.clone();
            }
            done = flight
                .cond
                .wait(done)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    // The critical sections under this lock are tiny map operations that
    // cannot panic halfway, so a poisoned mutex still holds a consistent
    // Inner and we take it back rather than propagate the poison.
    fn lock_inner(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(tau: f64) -> SurfaceRequest {
        SurfaceRequest::new(2, 2, 100.0, 0.05, 0.0, tau, (0.15, 0.35), (90.0, 110.0)).unwrap()
    }

    #[test]
    fn test_second_identical_request_hits_cache() {
        let manager = SurfaceManager::with_capacity(4);
        let first = manager.get_tensor(&request(1.0)).unwrap();
        let second = manager.get_tensor(&request(1.0)).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let stats = manager.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.evaluations, 1);
    }

    #[test]
    fn test_different_greek_same_request_is_a_hit() {
        let manager = SurfaceManager::with_capacity(4);
        let _ = manager.get_greek(&request(1.0), GreekKind::Price).unwrap();
        let _ = manager.get_greek(&request(1.0), GreekKind::Delta).unwrap();

        let stats = manager.stats();
        assert_eq!(stats.evaluations, 1);
        assert_eq!(stats.hits, 1);
    }

    #[test]
    fn test_failed_evaluation_is_not_cached() {
        let manager = SurfaceManager::with_capacity(4);
        let bad =
            SurfaceRequest::new(2, 2, 100.0, 0.5, 0.0, 5.0, (0.01, 0.02), (90.0, 110.0)).unwrap();
        assert!(manager.get_tensor(&bad).is_err());
        assert_eq!(manager.cached_tensors(), 0);
        // A retry evaluates again instead of replaying a cached error.
        assert!(manager.get_tensor(&bad).is_err());
        assert_eq!(manager.stats().evaluations, 2);
    }

    #[test]
    fn test_dedicated_pool_configuration() {
        let config = EngineConfig {
            cache_capacity: 2,
            threads: Some(2),
            grid_resolution: 10,
        };
        let manager = SurfaceManager::new(&config).unwrap();
        assert!(manager.get_tensor(&request(1.0)).is_ok());
        assert_eq!(manager.stats().evaluations, 1);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            cache_capacity: 0,
            threads: None,
            grid_resolution: 10,
        };
        assert!(SurfaceManager::new(&config).is_err());
    }
}
