//! DTOs for rental endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::Rental;

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub id: i32,
    pub customer_id: i32,
    pub film_id: i32,
    pub rental_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
    pub amount: Option<Decimal>,
}

impl From<Rental> for RentalResponse {
    fn from(r: Rental) -> Self {
        Self {
            id: r.id,
            customer_id: r.customer_id,
            film_id: r.film_id,
            rental_date: r.rental_date,
            return_date: r.return_date,
            amount: r.amount,
        }
    }
}
