use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Type,
    Rating,
    Distance,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "type" => Ok(Self::Type),
            "rating" => Ok(Self::Rating),
            "distance" => Ok(Self::Distance),
            other => Err(format!("unknown sort field '{other}'")),
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(format!("unknown sort direction '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortSpec {
    pub const fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub const fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub const fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// A 1-indexed page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub const fn new(page: u32, limit: u32) -> Self { Self { page, limit } }

    /// Index of the first item on this page; `None` for page 0, limit 0 or
    /// an offset that does not fit in memory.
    pub fn offset(&self) -> Option<usize> {
        if self.page == 0 || self.limit == 0 {
            return None;
        }
        let page = usize::try_from(self.page - 1).ok()?;
        let limit = usize::try_from(self.limit).ok()?;
        page.checked_mul(limit)
    }
}
