//! DTOs for customer endpoints.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::entities::{Customer, CustomerRental, CustomerSummary};

#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address: String,
    pub address2: Option<String>,
    pub city: String,
    pub country: String,
    pub created_at: NaiveDateTime,
    /// `'1'` for active customers, `'0'` otherwise.
    pub active: char,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            email: c.email,
            address: c.address,
            address2: c.address2,
            city: c.city,
            country: c.country,
            created_at: c.created_at,
            active: if c.active { '1' } else { '0' },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerRentalResponse {
    pub rental_id: i32,
    pub film_id: i32,
    pub film_title: String,
    pub rental_date: NaiveDateTime,
    pub return_date: Option<NaiveDateTime>,
    pub amount: Option<Decimal>,
}

impl From<CustomerRental> for CustomerRentalResponse {
    fn from(r: CustomerRental) -> Self {
        Self {
            rental_id: r.rental_id,
            film_id: r.film_id,
            film_title: r.film_title,
            rental_date: r.rental_date,
            return_date: r.return_date,
            amount: r.amount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CustomerSummaryResponse {
    pub customer_id: i32,
    pub full_name: String,
    pub total_rentals: i64,
    pub open_rentals: i64,
    pub total_spent: Decimal,
    pub first_rental_at: Option<NaiveDateTime>,
    pub last_rental_at: Option<NaiveDateTime>,
}

impl From<CustomerSummary> for CustomerSummaryResponse {
    fn from(s: CustomerSummary) -> Self {
        Self {
            customer_id: s.customer_id,
            full_name: s.full_name,
            total_rentals: s.total_rentals,
            open_rentals: s.open_rentals,
            total_spent: s.total_spent,
            first_rental_at: s.first_rental_at,
            last_rental_at: s.last_rental_at,
        }
    }
}
