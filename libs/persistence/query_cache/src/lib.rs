//! Process-local, time-bound memoisation of query results.
//!
//! Values are held as-is (no serialisation), so a cached `Arc` comes back
//! pointer-equal until it expires or the cache is cleared.

pub mod bind;
pub mod cache;
pub mod config;
pub mod key;
pub mod macros;
pub mod memory;

pub use bind::{BoundCache, CacheTypeBind};
pub use cache::{CacheError, CacheResult, CacheTrait};
pub use config::MemoryConfig;
pub use key::{CacheKey, CacheKeyArg1, json_key_part};
pub use memory::MemoryCache;
