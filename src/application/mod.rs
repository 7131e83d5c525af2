//! Application layer: parameter validation and query services.
//!
//! Services validate raw request parameters, call repository traits and put
//! the rows they get back into a deterministic shape for the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::customer_service::CustomerService`] - Customers, their rentals and summaries
//! - [`services::film_service::FilmService`] - Film catalogue and rental rankings
//! - [`services::rental_service::RentalService`] - Rentals and monthly aggregates

pub mod services;
pub mod validation;
