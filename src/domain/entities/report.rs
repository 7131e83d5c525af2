//! Aggregate report rows.
//!
//! Each row is produced fresh for a single request. The `rank_*` helpers put
//! rows in their canonical order so every provider yields the same output.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MostRentedFilm {
    pub film_id: i32,
    pub title: String,
    pub rental_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedCategory {
    pub category_id: i32,
    pub name: String,
    pub rental_count: i64,
}

/// Rentals started in one calendar month. `month` is the first day of the month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyCount {
    pub month: NaiveDate,
    pub rentals: i64,
    pub open_rentals: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyRevenue {
    pub month: NaiveDate,
    pub amount: Decimal,
}

/// Orders by rental count descending, then film id ascending, and keeps `limit` rows.
pub fn rank_films(mut rows: Vec<MostRentedFilm>, limit: usize) -> Vec<MostRentedFilm> {
    rows.sort_by(|a, b| {
        b.rental_count
            .cmp(&a.rental_count)
            .then(a.film_id.cmp(&b.film_id))
    });
    rows.truncate(limit);
    rows
}

/// Orders by rental count descending, then category id ascending, and keeps `limit` rows.
pub fn rank_categories(mut rows: Vec<WatchedCategory>, limit: usize) -> Vec<WatchedCategory> {
    rows.sort_by(|a, b| {
        b.rental_count
            .cmp(&a.rental_count)
            .then(a.category_id.cmp(&b.category_id))
    });
    rows.truncate(limit);
    rows
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
