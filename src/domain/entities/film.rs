//! Film and category entities.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A film in the catalogue.
///
/// `category` is the film's primary category name (alphabetically first when
/// a film belongs to several).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Film {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub length: Option<i32>,
    #[serde(default)]
    pub rating: Option<String>,
    pub rental_rate: Decimal,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Lifetime aggregate for a single film.
#[derive(Debug, Clone, PartialEq)]
pub struct FilmSummary {
    pub film_id: i32,
    pub title: String,
    pub total_rentals: i64,
    pub open_rentals: i64,
    pub total_revenue: Decimal,
    pub last_rented_at: Option<NaiveDateTime>,
}
