use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

/// When an event takes place.
///
/// Serialised as plain text: an ISO date (`2026-10-31`) or a weekly
/// recurrence (`Every Friday`). Text that is neither is kept verbatim and
/// never falls on any date.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventDate {
    On(NaiveDate),
    Every(Weekday),
    Unrecognized(String),
}

impl EventDate {
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match self {
            Self::On(day) => *day == date,
            Self::Every(weekday) => *weekday == date.weekday(),
            Self::Unrecognized(_) => false,
        }
    }

    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Self::On(date);
        }

        let mut words = trimmed.split_whitespace();
        let recurring = words
            .next()
            .filter(|word| word.eq_ignore_ascii_case("every"))
            .and_then(|_| words.next())
            .and_then(|day| Weekday::from_str(day).ok());

        match recurring {
            Some(weekday) => Self::Every(weekday),
            None => Self::Unrecognized(raw.to_string()),
        }
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Every(weekday) => {
                write!(f, "Every {}", weekday_name(*weekday))
            }
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl From<&str> for EventDate {
    fn from(raw: &str) -> Self { Self::parse(raw) }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self { Self::On(date) }
}

impl Serialize for EventDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EventDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

#[derive(
    Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct VenueEvent {
    #[builder(default = Uuid::now_v7())]
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,
    #[builder(default)]
    #[serde(default)]
    pub bar_id: Uuid,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(strip_option, into))]
    #[serde(default)]
    pub description: Option<String>,
    #[builder(setter(into))]
    #[schema(value_type = String, example = "Every Friday")]
    pub date: EventDate,
    #[builder(default)]
    #[serde(default)]
    pub attendees: u32,
    #[builder(default)]
    #[serde(default)]
    pub interested: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_literal_date() {
        assert_eq!(
            EventDate::parse("2026-10-31"),
            EventDate::On(date(2026, 10, 31))
        );
    }

    #[test]
    fn test_parse_recurring_weekday() {
        assert_eq!(
            EventDate::parse("Every Friday"),
            EventDate::Every(Weekday::Fri)
        );
        assert_eq!(
            EventDate::parse("  every saturday night"),
            EventDate::Every(Weekday::Sat)
        );
    }

    #[test]
    fn test_unrecognized_text_is_kept() {
        let parsed = EventDate::parse("Sometime soon");
        assert_eq!(
            parsed,
            EventDate::Unrecognized("Sometime soon".to_string())
        );
        assert!(!parsed.occurs_on(date(2026, 10, 16)));
        assert_eq!(parsed.to_string(), "Sometime soon");
    }

    #[test]
    fn test_occurs_on() {
        // 2026-10-16 is a Friday
        let friday = date(2026, 10, 16);
        assert!(EventDate::Every(Weekday::Fri).occurs_on(friday));
        assert!(!EventDate::Every(Weekday::Sat).occurs_on(friday));
        assert!(EventDate::On(friday).occurs_on(friday));
        assert!(!EventDate::On(date(2026, 10, 17)).occurs_on(friday));
    }

    #[test]
    fn test_serialises_as_text() {
        let event = VenueEvent::builder()
            .title("Techno Night")
            .date("every friday")
            .build();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["date"], "Every Friday");

        let back: VenueEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.date, EventDate::Every(Weekday::Fri));
    }
}
