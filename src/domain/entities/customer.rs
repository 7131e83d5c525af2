//! Customer entity and customer-scoped read models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A store customer with the postal address flattened in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub country: String,
    pub created_at: NaiveDateTime,
    pub active: bool,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match against first, last, or full name.
    ///
    /// `needle` must already be lowercase.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.first_name.to_lowercase().contains(needle)
            || self.last_name.to_lowercase().contains(needle)
            || self.full_name().to_lowercase().contains(needle)
    }
}

/// One entry of a customer's rental history.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRental {
    pub rental_id: i32,
    pub film_id: i32,
    pub film_title: String,
    pub rental_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
    pub amount: Option<Decimal>,
}

/// Lifetime aggregate for a single customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: i32,
    pub full_name: String,
    pub total_rentals: i64,
    pub open_rentals: i64,
    pub total_spent: Decimal,
    pub first_rental_at: Option<NaiveDateTime>,
    pub last_rental_at: Option<NaiveDateTime>,
}
