//! Core domain entities of the rental store.
//!
//! Entities are plain data owned by the persistence layer; services only read
//! and reshape them.
//!
//! # Entity Types
//!
//! - [`Customer`] - A store customer with postal address
//! - [`Film`] / [`Category`] - Catalogue entries
//! - [`Rental`] - A film rented by a customer, open until returned
//!
//! Read models derived from these live alongside them: [`CustomerRental`],
//! [`CustomerSummary`], [`FilmSummary`] and the report rows in [`report`].

pub mod customer;
pub mod film;
pub mod rental;
pub mod report;

pub use customer::{Customer, CustomerRental, CustomerSummary};
pub use film::{Category, Film, FilmSummary};
pub use rental::{Rental, RentalFilter};
pub use report::{MonthlyCount, MonthlyRevenue, MostRentedFilm, WatchedCategory};
