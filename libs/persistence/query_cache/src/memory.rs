use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use moka::future::Cache;
use tracing::debug;

use crate::{
    cache::{CacheResult, CacheTrait},
    config::MemoryConfig,
};

/// In-process cache with a single time-to-live measured from insertion.
#[derive(Clone)]
pub struct MemoryCache<T> {
    cache: Cache<String, T>,
    config: MemoryConfig,
    generation: Arc<AtomicU64>,
}

impl<T> MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(config: MemoryConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(config.ttl())
            .build();

        Self {
            cache,
            config,
            generation: Arc::default(),
        }
    }

    pub fn config(&self) -> &MemoryConfig { &self.config }

    /// Approximate number of live entries.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}

#[async_trait::async_trait]
impl<T> CacheTrait for MemoryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Value = T;

    async fn exists(&self, key: &str) -> CacheResult<bool> {
        Ok(self.cache.contains_key(key))
    }

    async fn try_get(&self, key: &str) -> CacheResult<Option<Self::Value>> {
        Ok(self.cache.get(key).await)
    }

    async fn set(&self, key: &str, value: Self::Value) -> CacheResult<()> {
        self.cache.insert(key.to_string(), value).await;
        Ok(())
    }

    async fn remove(&self, key: &str) -> CacheResult<bool> {
        Ok(self.cache.remove(key).await.is_some())
    }

    fn generation(&self) -> u64 { self.generation.load(Ordering::SeqCst) }

    async fn clear(&self) -> CacheResult<()> {
        // The bump must precede the invalidation for set_unless_cleared.
        self.generation.fetch_add(1, Ordering::SeqCst);
        // Moka only drops entries lazily, but invalidated ones are never
        // returned again.
        self.cache.invalidate_all();
        debug!("Cleared all cached entries");
        Ok(())
    }
}
