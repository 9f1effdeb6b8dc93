use chrono::Weekday;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Opening hours as free text per weekday, e.g. `"18:00 - 02:00"`.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema,
)]
#[serde(default)]
pub struct WeeklyHours {
    pub monday: Option<String>,
    pub tuesday: Option<String>,
    pub wednesday: Option<String>,
    pub thursday: Option<String>,
    pub friday: Option<String>,
    pub saturday: Option<String>,
    pub sunday: Option<String>,
}

impl WeeklyHours {
    /// The same opening text for every day of the week.
    pub fn every_day(hours: &str) -> Self {
        let day = Some(hours.to_string());
        Self {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day.clone(),
            saturday: day.clone(),
            sunday: day,
        }
    }

    pub fn for_weekday(&self, weekday: Weekday) -> Option<&str> {
        let day = match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        };
        day.as_deref()
    }
}
