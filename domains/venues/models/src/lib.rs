pub mod drinks;
pub mod events;
pub mod hours;
pub mod venues;

pub use drinks::{Drink, DrinkCategory};
pub use events::{EventDate, VenueEvent};
pub use hours::WeeklyHours;
pub use venues::{NewVenue, UpdateVenue, Venue};
