//! Repository trait definitions for the domain layer.
//!
//! These traits are the persistence provider contract. Services depend only on
//! them; concrete implementations live in `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customers, their rentals and aggregates
//! - [`FilmRepository`] - Film catalogue and film/category reports
//! - [`RentalRepository`] - Rentals and monthly aggregates
//! - [`HealthRepository`] - Storage liveness probe
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` under `cfg(test)`.

pub mod customer_repository;
pub mod film_repository;
pub mod health_repository;
pub mod rental_repository;

pub use customer_repository::CustomerRepository;
pub use film_repository::FilmRepository;
pub use health_repository::HealthRepository;
pub use rental_repository::RentalRepository;

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use film_repository::MockFilmRepository;
#[cfg(test)]
pub use health_repository::MockHealthRepository;
#[cfg(test)]
pub use rental_repository::MockRentalRepository;
