//! The sample venue catalogue the service starts with.
//!
//! Ids are fixed so that links and tests stay stable across restarts.

use uuid::Uuid;
use venues_models::{
    Drink, DrinkCategory, Venue, VenueEvent, WeeklyHours,
};

pub const CONTROL_CLUB_ID: Uuid = Uuid::from_u128(1);
pub const OLD_TOWN_ID: Uuid = Uuid::from_u128(2);
pub const FLYING_CIRCUS_ID: Uuid = Uuid::from_u128(3);
pub const JOBEN_BISTRO_ID: Uuid = Uuid::from_u128(4);
pub const FESTIVAL_39_ID: Uuid = Uuid::from_u128(5);
pub const SKY_LOUNGE_ID: Uuid = Uuid::from_u128(6);

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|tag| (*tag).to_string()).collect()
}

fn drink(id: u128, name: &str, category: DrinkCategory, price: f64) -> Drink {
    Drink::builder()
        .id(Uuid::from_u128(id))
        .name(name)
        .category(category)
        .price(price)
        .build()
}

fn event(id: u128, title: &str, date: &str, attendees: u32) -> VenueEvent {
    VenueEvent::builder()
        .id(Uuid::from_u128(id))
        .title(title)
        .date(date)
        .attendees(attendees)
        .interested(attendees * 3)
        .build()
}

fn nights(hours: &str) -> WeeklyHours {
    WeeklyHours {
        thursday: Some(hours.to_string()),
        friday: Some(hours.to_string()),
        saturday: Some(hours.to_string()),
        ..WeeklyHours::default()
    }
}

pub fn sample_venues() -> Vec<Venue> {
    let mut venues = vec![
        Venue::builder()
            .id(CONTROL_CLUB_ID)
            .name("Control Club")
            .venue_type("Club")
            .address("Str. Constantin Mille 4, Bucharest")
            .location("BUCHAREST")
            .tags(tags(&["techno", "live-music", "dancing"]))
            .lat(44.4361)
            .lng(26.0986)
            .is_open(true)
            .hours(nights("22:00 - 05:00"))
            .rating(4.6)
            .drinks(vec![
                drink(101, "Ursus", DrinkCategory::Beer, 12.0),
                drink(102, "Gin Tonic", DrinkCategory::Cocktail, 28.0),
            ])
            .events(vec![event(201, "Techno Fridays", "Every Friday", 120)])
            .build(),
        Venue::builder()
            .id(OLD_TOWN_ID)
            .name("Old Town")
            .venue_type("Pub")
            .address("Strada Lipscani 12, Bucharest")
            .location("BUCHAREST")
            .tags(tags(&["craft-beer", "terrace", "pub"]))
            .lat(44.4310)
            .lng(26.1010)
            .is_open(false)
            .hours(WeeklyHours::every_day("12:00 - 02:00"))
            .rating(4.2)
            .drinks(vec![
                drink(103, "Zaganu", DrinkCategory::Beer, 15.0),
                drink(104, "Palinca", DrinkCategory::Shot, 10.0),
            ])
            .events(vec![event(202, "Halloween Party", "2026-10-31", 80)])
            .build(),
        Venue::builder()
            .id(FLYING_CIRCUS_ID)
            .name("Flying Circus Pub")
            .venue_type("Pub")
            .address("Strada Iuliu Maniu 2, Cluj-Napoca")
            .location("CLUJ")
            .tags(tags(&["live-music", "rock", "pub"]))
            .lat(46.7700)
            .lng(23.5920)
            .is_open(true)
            .hours(WeeklyHours::every_day("18:00 - 03:00"))
            .rating(4.5)
            .drinks(vec![drink(105, "Ciuc", DrinkCategory::Beer, 11.0)])
            .events(vec![event(203, "Open Mic", "Every Wednesday", 45)])
            .build(),
        Venue::builder()
            .id(JOBEN_BISTRO_ID)
            .name("Joben Bistro")
            .venue_type("Cocktail Bar")
            .address("Strada Avram Iancu 29, Cluj-Napoca")
            .location("CLUJ")
            .tags(tags(&["cocktails", "steampunk"]))
            .lat(46.7685)
            .lng(23.5880)
            .is_open(false)
            .hours(WeeklyHours::every_day("10:00 - 01:00"))
            .rating(4.7)
            .drinks(vec![
                drink(106, "Old Fashioned", DrinkCategory::Cocktail, 32.0),
                drink(107, "Lemonade", DrinkCategory::NonAlcoholic, 14.0),
            ])
            .build(),
        Venue::builder()
            .id(FESTIVAL_39_ID)
            .name("Festival 39")
            .venue_type("Cocktail Bar")
            .address("Strada Republicii 62, Brasov")
            .location("BRASOV")
            .tags(tags(&["cocktails", "jazz", "live-music"]))
            .lat(45.6427)
            .lng(25.5887)
            .is_open(true)
            .hours(WeeklyHours::every_day("09:00 - 02:00"))
            .rating(4.4)
            .drinks(vec![drink(
                108,
                "Feteasca Neagra",
                DrinkCategory::Wine,
                22.0,
            )])
            .events(vec![event(204, "Jazz Night", "Every Saturday", 60)])
            .build(),
        Venue::builder()
            .id(SKY_LOUNGE_ID)
            .name("Sky Lounge Pipera")
            .venue_type("Lounge")
            .address("Bulevardul Pipera 1, Voluntari")
            .location("ILFOV")
            .tags(tags(&["rooftop", "cocktails"]))
            .lat(44.5070)
            .lng(26.1200)
            .is_open(true)
            .hours(nights("17:00 - 02:00"))
            .rating(4.0)
            .drinks(vec![drink(
                109,
                "Aperol Spritz",
                DrinkCategory::Cocktail,
                30.0,
            )])
            .events(vec![event(205, "Sunset Session", "2026-10-18", 40)])
            .build(),
    ];

    for venue in &mut venues {
        venue.adopt_children();
    }
    venues
}
