use std::sync::Arc;

use query_cache::{
    CacheResult, MemoryCache, MemoryConfig, cache_key, json_key_part,
};
use venues_queries::{NearbyQuery, VenueFilterQuery};
use venues_responses::VenueResponse;

/// A shared, immutable result list; cache hits hand back the same allocation.
pub type VenueList = Arc<Vec<VenueResponse>>;

pub type VenueCache = MemoryCache<VenueList>;

cache_key!(VenueListCacheKey::<VenueList> => "venues:list:{}"[filter_json: String]);
cache_key!(NearbyVenuesCacheKey::<VenueList> => "venues:nearby:{}"[query_json: String]);

pub fn venue_cache(config: MemoryConfig) -> VenueCache {
    MemoryCache::new(config)
}

/// JSON form of a filter query, used verbatim inside the list key.
pub fn filter_key_part(query: &VenueFilterQuery) -> CacheResult<String> {
    json_key_part(query)
}

pub fn nearby_key_part(query: &NearbyQuery) -> CacheResult<String> {
    json_key_part(query)
}
