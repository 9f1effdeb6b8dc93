/// Cache-specific error type.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Key not found")]
    KeyNotFound,

    #[error("Key serialization error: {0}")]
    KeySerialization(#[from] serde_json::Error),

    #[error("Operation not supported: {0}")]
    Unsupported(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// A keyed cache holding values of a single type.
#[async_trait::async_trait]
pub trait CacheTrait: Send + Sync {
    type Value: Clone + Send + Sync;

    /// Check if key exists in cache
    async fn exists(&self, key: &str) -> CacheResult<bool>;

    /// Get value from cache
    async fn get(&self, key: &str) -> CacheResult<Self::Value> {
        self.try_get(key).await?.ok_or(CacheError::KeyNotFound)
    }

    /// Get value from cache, returning None if not found
    async fn try_get(&self, key: &str) -> CacheResult<Option<Self::Value>>;

    /// Set value in cache
    async fn set(&self, key: &str, value: Self::Value) -> CacheResult<()>;

    /// Remove key from cache
    async fn remove(&self, key: &str) -> CacheResult<bool>;

    /// Counter advanced by every successful `clear`.
    ///
    /// Backends that cannot clear always report zero.
    fn generation(&self) -> u64 { 0 }

    /// Clear all entries (optional operation)
    async fn clear(&self) -> CacheResult<()> {
        Err(CacheError::Unsupported(
            "Clear operation not supported by this cache implementation"
                .to_string(),
        ))
    }
}
