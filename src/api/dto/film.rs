//! DTOs for film endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Film, FilmSummary};

#[derive(Debug, Serialize)]
pub struct FilmResponse {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i32>,
    pub length: Option<i32>,
    pub rating: Option<String>,
    pub rental_rate: Decimal,
    pub category: Option<String>,
}

impl From<Film> for FilmResponse {
    fn from(f: Film) -> Self {
        Self {
            id: f.id,
            title: f.title,
            description: f.description,
            release_year: f.release_year,
            length: f.length,
            rating: f.rating,
            rental_rate: f.rental_rate,
            category: f.category,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilmSummaryResponse {
    pub film_id: i32,
    pub title: String,
    pub total_rentals: i64,
    pub open_rentals: i64,
    pub total_revenue: Decimal,
    pub last_rented_at: Option<NaiveDateTime>,
}

impl From<FilmSummary> for FilmSummaryResponse {
    fn from(s: FilmSummary) -> Self {
        Self {
            film_id: s.film_id,
            title: s.title,
            total_rentals: s.total_rentals,
            open_rentals: s.open_rentals,
            total_revenue: s.total_revenue,
            last_rented_at: s.last_rented_at,
        }
    }
}
