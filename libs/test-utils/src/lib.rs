pub mod clock;
pub mod test_helpers;

use std::sync::Arc;

use chrono::NaiveDate;
pub use clock::FixedClock;
use mockable::Clock;
use query_cache::MemoryConfig;
pub use seeders::*;
pub use test_helpers::*;
use venues_cache_keys::{VenueCache, venue_cache};
use venues_dao::VenueDao;

/// Friday 16 October 2026, the reference day for seeded schedules.
pub fn reference_friday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap_or_default()
}

/// In-memory stand-in for a running deployment: a seeded store, an empty
/// result cache and a clock frozen on [`reference_friday`].
pub struct TestVenueStore {
    pub dao: VenueDao,
    pub cache: VenueCache,
    pub clock: FixedClock,
}

impl TestVenueStore {
    /// Store seeded with [`sample_venues`].
    pub fn new() -> Self { Self::with_venues(sample_venues()) }

    pub fn empty() -> Self { Self::with_venues(Vec::new()) }

    pub fn with_venues(venues: Vec<venues_models::Venue>) -> Self {
        init_test_tracing();
        Self {
            dao: VenueDao::new(venues),
            cache: test_cache(),
            clock: FixedClock::at_date(reference_friday()),
        }
    }

    pub fn shared_clock(&self) -> Arc<dyn Clock> {
        Arc::new(self.clock.clone())
    }
}

impl Default for TestVenueStore {
    fn default() -> Self { Self::new() }
}

pub fn test_cache() -> VenueCache { venue_cache(MemoryConfig::default()) }

/// Installs a test writer subscriber once per process; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}
