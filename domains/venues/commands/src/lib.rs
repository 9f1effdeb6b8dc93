use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use venues_models::{Drink, NewVenue, UpdateVenue, VenueEvent, WeeklyHours};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueCommand {
    pub name: String,
    #[serde(rename = "type")]
    pub venue_type: String,
    #[serde(default)]
    pub address: String,
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub is_open: bool,
    #[serde(default)]
    pub hours: WeeklyHours,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub drinks: Vec<Drink>,
    #[serde(default)]
    pub events: Vec<VenueEvent>,
}

impl From<CreateVenueCommand> for NewVenue {
    fn from(command: CreateVenueCommand) -> Self {
        Self {
            name: command.name,
            venue_type: command.venue_type,
            address: command.address,
            location: command.location,
            tags: command.tags,
            lat: command.lat,
            lng: command.lng,
            is_open: command.is_open,
            hours: command.hours,
            rating: command.rating,
            drinks: command.drinks,
            events: command.events,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVenueCommand {
    #[serde(skip)]
    pub venue_id: Uuid,
    pub name: Option<String>,
    #[serde(rename = "type")]
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

impl From<UpdateVenueCommand> for UpdateVenue {
    fn from(command: UpdateVenueCommand) -> Self {
        Self {
            name: command.name,
            venue_type: command.venue_type,
            address: command.address,
            location: command.location,
            tags: command.tags,
            lat: command.lat,
            lng: command.lng,
            is_open: command.is_open,
            hours: command.hours,
            rating: command.rating,
            drinks: command.drinks,
            events: command.events,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DeleteVenueCommand {
    pub venue_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_command_from_json() {
        let command: CreateVenueCommand = serde_json::from_str(
            r#"{
                "name": "Gradina Eden",
                "type": "Garden Bar",
                "location": "BUCHAREST",
                "lat": 44.4446,
                "lng": 26.0918,
                "isOpen": true,
                "tags": ["terrace"]
            }"#,
        )
        .unwrap();

        let new_venue = NewVenue::from(command);
        assert_eq!(new_venue.venue_type, "Garden Bar");
        assert!(new_venue.is_open);
        assert_eq!(new_venue.rating, 0.0);
        assert!(new_venue.drinks.is_empty());
    }

    #[test]
    fn test_update_command_ignores_body_id() {
        let command: UpdateVenueCommand = serde_json::from_str(
            r#"{"venueId": "0192a3b4-0000-7000-8000-000000000000", "rating": 4.9}"#,
        )
        .unwrap();

        assert!(command.venue_id.is_nil());
        let update = UpdateVenue::from(command);
        assert_eq!(update.rating, Some(4.9));
        assert!(update.name.is_none());
    }
}
