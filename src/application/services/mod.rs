//! Query services for the application layer.

pub mod customer_service;
pub mod film_service;
pub mod rental_service;

pub use customer_service::CustomerService;
pub use film_service::FilmService;
pub use rental_service::RentalService;
