pub mod venues;

pub use venues::VenueDao;
