use std::collections::BTreeSet;

use geo::Coordinates;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{PageRequest, SortSpec};

/// Location code that asks for distance annotation instead of a city match.
pub const NEAR_ME: &str = "NEAR_ME";
/// Reserved filter token turning on the "open now" ordering.
pub const OPEN_NOW_MARKER: &str = "open-now";
/// Reserved filter token restricting results to venues with an event today.
pub const EVENTS_TODAY_MARKER: &str = "events-today";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LocationFilter {
    City(String),
    NearMe,
}

impl From<String> for LocationFilter {
    fn from(code: String) -> Self {
        if code.trim().eq_ignore_ascii_case(NEAR_ME) {
            Self::NearMe
        }
        else {
            Self::City(code)
        }
    }
}

impl From<&str> for LocationFilter {
    fn from(code: &str) -> Self { Self::from(code.to_string()) }
}

impl From<LocationFilter> for String {
    fn from(filter: LocationFilter) -> Self {
        match filter {
            LocationFilter::City(code) => code,
            LocationFilter::NearMe => NEAR_ME.to_string(),
        }
    }
}

/// Criteria narrowing and ordering the venue list.
///
/// Field order is significant: the JSON form of this struct is the cache
/// key of its result.
#[derive(
    Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder,
)]
#[serde(rename_all = "camelCase", default)]
#[builder(field_defaults(default))]
pub struct VenueFilterQuery {
    #[builder(setter(strip_option, into))]
    pub location: Option<LocationFilter>,
    pub tags: BTreeSet<String>,
    pub open_now: bool,
    pub events_today: bool,
    #[builder(setter(strip_option, into))]
    pub search: Option<String>,
    #[builder(setter(strip_option))]
    pub user_location: Option<Coordinates>,
    #[builder(setter(strip_option))]
    pub sort: Option<SortSpec>,
    #[builder(setter(strip_option))]
    pub page: Option<PageRequest>,
}

impl VenueFilterQuery {
    /// Splits raw filter tokens into tags and the reserved mode markers.
    ///
    /// Markers match case-insensitively and accept `_` for `-`; blank
    /// tokens are dropped, remaining tags are lowercased.
    pub fn with_filter_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            let normalized =
                token.as_ref().trim().to_ascii_lowercase().replace('_', "-");
            match normalized.as_str() {
                "" => {}
                OPEN_NOW_MARKER => self.open_now = true,
                EVENTS_TODAY_MARKER => self.events_today = true,
                _ => {
                    self.tags.insert(normalized);
                }
            }
        }
        self
    }

    /// Search text with surrounding whitespace removed, if any remains.
    pub fn search_text(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn is_near_me(&self) -> bool {
        matches!(self.location, Some(LocationFilter::NearMe))
    }

    /// True when nothing in the query would narrow, annotate or reorder.
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.tags.is_empty()
            && !self.open_now
            && !self.events_today
            && self.search_text().is_none()
            && self.user_location.is_none()
            && self.sort.is_none()
            && self.page.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SortField;

    #[test]
    fn test_location_codes() {
        assert_eq!(LocationFilter::from("near_me"), LocationFilter::NearMe);
        assert_eq!(
            LocationFilter::from("BUCHAREST"),
            LocationFilter::City("BUCHAREST".to_string())
        );
    }

    #[test]
    fn test_filter_tokens_split_markers_from_tags() {
        let query = VenueFilterQuery::default().with_filter_tokens([
            "OPEN_NOW",
            "Techno",
            " ",
            "events-today",
            "craft-beer",
        ]);

        assert!(query.open_now);
        assert!(query.events_today);
        assert_eq!(
            query.tags.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["craft-beer", "techno"]
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(VenueFilterQuery::default().is_empty());
        assert!(
            VenueFilterQuery::builder()
                .search("   ")
                .build()
                .is_empty()
        );
        assert!(
            !VenueFilterQuery::builder()
                .sort(SortSpec::asc(SortField::Name))
                .build()
                .is_empty()
        );
    }

    #[test]
    fn test_equal_queries_serialise_identically() {
        let a = VenueFilterQuery::default().with_filter_tokens(["b", "a"]);
        let b = VenueFilterQuery::default().with_filter_tokens(["a", "b"]);

        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_location_serialises_as_code() {
        let query = VenueFilterQuery::builder().location("NEAR_ME").build();
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["location"], "NEAR_ME");
    }
}
