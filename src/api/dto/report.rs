//! DTOs for aggregate reports.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{MonthlyCount, MonthlyRevenue, MostRentedFilm, WatchedCategory};

/// Months are rendered as `YYYY-MM`.
const MONTH_FORMAT: &str = "%Y-%m";

#[derive(Debug, Serialize)]
pub struct MostRentedFilmResponse {
    pub film_id: i32,
    pub title: String,
    pub rental_count: i64,
}

impl From<MostRentedFilm> for MostRentedFilmResponse {
    fn from(r: MostRentedFilm) -> Self {
        Self {
            film_id: r.film_id,
            title: r.title,
            rental_count: r.rental_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryCountResponse {
    pub category_id: i32,
    pub name: String,
    pub rental_count: i64,
}

impl From<WatchedCategory> for CategoryCountResponse {
    fn from(r: WatchedCategory) -> Self {
        Self {
            category_id: r.category_id,
            name: r.name,
            rental_count: r.rental_count,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyCountResponse {
    pub month: String,
    pub rentals: i64,
    pub open_rentals: i64,
}

impl From<MonthlyCount> for MonthlyCountResponse {
    fn from(r: MonthlyCount) -> Self {
        Self {
            month: r.month.format(MONTH_FORMAT).to_string(),
            rentals: r.rentals,
            open_rentals: r.open_rentals,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MonthlyRevenueResponse {
    pub month: String,
    pub amount: Decimal,
}

impl From<MonthlyRevenue> for MonthlyRevenueResponse {
    fn from(r: MonthlyRevenue) -> Self {
        Self {
            month: r.month.format(MONTH_FORMAT).to_string(),
            amount: r.amount,
        }
    }
}
