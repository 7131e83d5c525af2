//! Rental entity.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A single rental of a film by a customer.
///
/// A rental is open while `return_date` is `None`. `amount` is the sum of
/// payments recorded against it, if any.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rental {
    pub id: i32,
    pub customer_id: i32,
    pub film_id: i32,
    pub rental_date: NaiveDateTime,
    #[serde(default)]
    pub return_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl Rental {
    pub fn is_open(&self) -> bool {
        self.return_date.is_none()
    }
}

/// Optional listing filters, combined with AND semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RentalFilter {
    pub customer_id: Option<i32>,
    pub film_id: Option<i32>,
}

impl RentalFilter {
    pub fn matches(&self, rental: &Rental) -> bool {
        self.customer_id.is_none_or(|id| rental.customer_id == id)
            && self.film_id.is_none_or(|id| rental.film_id == id)
    }
}
