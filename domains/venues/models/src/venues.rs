use geo::Coordinates;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{Drink, VenueEvent, WeeklyHours};

#[derive(
    Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    #[builder(default = Uuid::now_v7())]
    pub id: Uuid,
    #[builder(setter(into))]
    pub name: String,
    #[serde(rename = "type")]
    #[builder(setter(into))]
    pub venue_type: String,
    #[builder(default, setter(into))]
    pub address: String,
    /// City code such as `BUCHAREST`.
    #[builder(setter(into))]
    pub location: String,
    #[builder(default)]
    pub tags: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    #[builder(default)]
    pub is_open: bool,
    #[builder(default)]
    pub hours: WeeklyHours,
    #[builder(default)]
    pub rating: f32,
    #[builder(default)]
    pub drinks: Vec<Drink>,
    #[builder(default)]
    pub events: Vec<VenueEvent>,
}

impl Venue {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|own| own.eq_ignore_ascii_case(tag))
    }

    /// Builds a stored venue from a creation request under the given id.
    pub fn from_new(id: Uuid, new: NewVenue) -> Self {
        let mut venue = Self {
            id,
            name: new.name,
            venue_type: new.venue_type,
            address: new.address,
            location: new.location,
            tags: new.tags,
            lat: new.lat,
            lng: new.lng,
            is_open: new.is_open,
            hours: new.hours,
            rating: new.rating,
            drinks: new.drinks,
            events: new.events,
        };
        venue.adopt_children();
        venue
    }

    /// Points every drink and event at this venue.
    pub fn adopt_children(&mut self) {
        for drink in &mut self.drinks {
            drink.bar_id = self.id;
        }
        for event in &mut self.events {
            event.bar_id = self.id;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, TypedBuilder)]
pub struct NewVenue {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub venue_type: String,
    #[builder(default, setter(into))]
    pub address: String,
    #[builder(setter(into))]
    pub location: String,
    #[builder(default)]
    pub tags: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    #[builder(default)]
    pub is_open: bool,
    #[builder(default)]
    pub hours: WeeklyHours,
    #[builder(default)]
    pub rating: f32,
    #[builder(default)]
    pub drinks: Vec<Drink>,
    #[builder(default)]
    pub events: Vec<VenueEvent>,
}

impl NewVenue {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, TypedBuilder)]
#[builder(field_defaults(default, setter(strip_option)))]
pub struct UpdateVenue {
    pub name: Option<String>,
    pub venue_type: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub is_open: Option<bool>,
    pub hours: Option<WeeklyHours>,
    pub rating: Option<f32>,
    pub drinks: Option<Vec<Drink>>,
    pub events: Option<Vec<VenueEvent>>,
}

impl UpdateVenue {
    /// Applies the present fields; the id never changes.
    pub fn apply_to(self, venue: &mut Venue) {
        if let Some(name) = self.name {
            venue.name = name;
        }
        if let Some(venue_type) = self.venue_type {
            venue.venue_type = venue_type;
        }
        if let Some(address) = self.address {
            venue.address = address;
        }
        if let Some(location) = self.location {
            venue.location = location;
        }
        if let Some(tags) = self.tags {
            venue.tags = tags;
        }
        if let Some(lat) = self.lat {
            venue.lat = lat;
        }
        if let Some(lng) = self.lng {
            venue.lng = lng;
        }
        if let Some(is_open) = self.is_open {
            venue.is_open = is_open;
        }
        if let Some(hours) = self.hours {
            venue.hours = hours;
        }
        if let Some(rating) = self.rating {
            venue.rating = rating;
        }
        if let Some(drinks) = self.drinks {
            venue.drinks = drinks;
        }
        if let Some(events) = self.events {
            venue.events = events;
        }
        venue.adopt_children();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DrinkCategory;

    fn control_club() -> Venue {
        Venue::builder()
            .name("Control Club")
            .venue_type("Club")
            .location("BUCHAREST")
            .tags(vec!["techno".into(), "Live-Music".into()])
            .lat(44.4361)
            .lng(26.0986)
            .build()
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let venue = control_club();
        assert!(venue.has_tag("TECHNO"));
        assert!(venue.has_tag("live-music"));
        assert!(!venue.has_tag("jazz"));
    }

    #[test]
    fn test_update_keeps_id_and_untouched_fields() {
        let mut venue = control_club();
        let id = venue.id;

        UpdateVenue::builder()
            .name("Control".to_string())
            .is_open(true)
            .build()
            .apply_to(&mut venue);

        assert_eq!(venue.id, id);
        assert_eq!(venue.name, "Control");
        assert!(venue.is_open);
        assert_eq!(venue.location, "BUCHAREST");
    }

    #[test]
    fn test_children_follow_their_venue() {
        let new = NewVenue::builder()
            .name("Old Town")
            .venue_type("Pub")
            .location("BUCHAREST")
            .lat(44.4310)
            .lng(26.1010)
            .drinks(vec![
                Drink::builder()
                    .name("Ursus")
                    .category(DrinkCategory::Beer)
                    .build(),
            ])
            .build();
        let id = Uuid::now_v7();

        let venue = Venue::from_new(id, new);

        assert_eq!(venue.drinks[0].bar_id, id);
    }

    #[test]
    fn test_serialised_field_names() {
        let json = serde_json::to_value(control_club()).unwrap();
        assert_eq!(json["type"], "Club");
        assert_eq!(json["isOpen"], false);
        assert!(json.get("venueType").is_none());
    }
}
