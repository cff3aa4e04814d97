//! Wire DTOs for the hotel backend.
//!
//! DESIGN
//! ======
//! Payloads are owned by the backend and treated as read-only snapshots here.
//! Optional collections default to empty so a sparse reply still renders.
//! Display fields on list items are lenient too: a missing or `null` field
//! falls back to its default instead of failing the whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Guest count sent with every quote request.
pub const QUOTE_GUESTS: u32 = 2;
/// Add-ons requested with every quote.
pub const QUOTE_ADDONS: [&str; 2] = ["wine", "flowers"];
/// Mood sent when asking the concierge.
pub const CONCIERGE_MOOD: &str = "romantic";
/// Dietary restrictions sent when asking the concierge.
pub const CONCIERGE_DIETARY: [&str; 1] = ["dairy"];

/// A bookable suite from `GET /rooms`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    /// Short view label, e.g. `"Ocean sunrise"`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub view: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_per_night: f64,
}

/// A menu entry from `GET /menu`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /concierge`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConciergeRequest {
    pub mood: String,
    pub dietary: Vec<String>,
}

impl Default for ConciergeRequest {
    fn default() -> Self {
        Self {
            mood: CONCIERGE_MOOD.to_owned(),
            dietary: CONCIERGE_DIETARY.iter().map(|d| (*d).to_owned()).collect(),
        }
    }
}

/// Reply of `POST /concierge`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ConciergeResponse {
    pub greeting: String,
    #[serde(default)]
    pub suggestions: Vec<SuggestionGroup>,
}

/// One themed group of concierge suggestions (dining, spa, ...).
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SuggestionGroup {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub items: Vec<SuggestionItem>,
}

/// A single suggestion. The backend names some items and titles others.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SuggestionItem {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl SuggestionItem {
    /// Text shown for the item: its name, else its title.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().or(self.title.as_deref()).unwrap_or_default()
    }
}

/// Body of `POST /booking/quote`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuoteRequest {
    #[serde(with = "time::serde::rfc3339")]
    pub check_in: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub check_out: OffsetDateTime,
    pub guests: u32,
    pub addons: Vec<String>,
}

impl QuoteRequest {
    /// One-night stay starting at `check_in` with the standard guest count and add-ons.
    #[must_use]
    pub fn one_night_from(check_in: OffsetDateTime) -> Self {
        Self {
            check_in,
            check_out: check_in + time::Duration::hours(24),
            guests: QUOTE_GUESTS,
            addons: QUOTE_ADDONS.iter().map(|a| (*a).to_owned()).collect(),
        }
    }
}

/// Reply of `POST /booking/quote`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookingQuote {
    pub nightly_rate: f64,
    pub nights: u32,
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub addons: Vec<QuoteAddon>,
    pub total: f64,
}

/// Priced add-on line in a quote.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuoteAddon {
    pub name: String,
    pub price: f64,
}

/// Render a price the way the page shows it: `$200`, `$12.5`.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount}")
}
