use std::borrow::Cow;

use crate::{
    CacheResult, CacheTrait,
    key::{CacheKey, CacheKeyArg1},
};

/// A cache handle bound to one concrete key.
pub struct BoundCache<'cache, C> {
    cache: &'cache C,
    key: Cow<'static, str>,
}

impl<'cache, C> BoundCache<'cache, C>
where
    C: CacheTrait,
{
    pub fn new(cache: &'cache C, key: Cow<'static, str>) -> Self {
        Self { cache, key }
    }

    pub fn key(&self) -> &str { &self.key }

    pub async fn exists(&self) -> CacheResult<bool> {
        self.cache.exists(&self.key).await
    }

    pub async fn try_get(&self) -> CacheResult<Option<C::Value>> {
        self.cache.try_get(&self.key).await
    }

    pub async fn get(&self) -> CacheResult<C::Value> {
        self.cache.get(&self.key).await
    }

    pub async fn set(&self, value: C::Value) -> CacheResult<()> {
        self.cache.set(&self.key, value).await
    }

    pub async fn remove(&self) -> CacheResult<bool> {
        self.cache.remove(&self.key).await
    }

    /// Stores `value` only if the cache has not been cleared since
    /// `generation` was read; returns whether the value was kept.
    ///
    /// A clear that races with the insert either invalidates the new entry
    /// itself or is seen by the generation check afterwards.
    pub async fn set_unless_cleared(
        &self, value: C::Value, generation: u64,
    ) -> CacheResult<bool> {
        self.set(value).await?;
        if self.cache.generation() == generation {
            return Ok(true);
        }
        self.remove().await?;
        Ok(false)
    }
}

pub trait CacheTypeBind: CacheKey {
    fn bind_with_args<'cache, C>(
        &self, cache: &'cache C, args: <Self as CacheKey>::Args<'_>,
    ) -> BoundCache<'cache, C>
    where
        C: CacheTrait<Value = <Self as CacheKey>::Value>,
    {
        let key = CacheKey::get_key_with_args(self, args);
        BoundCache::new(cache, key)
    }

    fn bind_with<'cache, 'arg, C>(
        &self, cache: &'cache C,
        arg: <<Self as CacheKey>::Args<'arg> as CacheKeyArg1>::Arg0,
    ) -> BoundCache<'cache, C>
    where
        C: CacheTrait<Value = <Self as CacheKey>::Value>,
        <Self as CacheKey>::Args<'arg>: CacheKeyArg1,
    {
        CacheTypeBind::bind_with_args(
            self,
            cache,
            <<Self as CacheKey>::Args<'arg> as CacheKeyArg1>::construct(arg),
        )
    }
}

impl<K> CacheTypeBind for K where K: CacheKey {}
