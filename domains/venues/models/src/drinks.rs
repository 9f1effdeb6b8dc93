use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DrinkCategory {
    Beer,
    Wine,
    Cocktail,
    Spirit,
    Shot,
    NonAlcoholic,
}

#[derive(
    Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder, ToSchema,
)]
#[serde(rename_all = "camelCase")]
pub struct Drink {
    #[builder(default = Uuid::now_v7())]
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,
    /// Owning venue; rewritten to the venue's id whenever the venue is stored.
    #[builder(default)]
    #[serde(default)]
    pub bar_id: Uuid,
    #[builder(setter(into))]
    pub name: String,
    pub category: DrinkCategory,
    #[builder(default)]
    #[serde(default)]
    pub price: f64,
    #[builder(default = true)]
    #[serde(default = "available_default")]
    pub available: bool,
}

fn available_default() -> bool { true }
