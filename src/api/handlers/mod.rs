//! HTTP request handlers for API endpoints.
//!
//! Handlers extract raw parameters, call one service method and map the
//! outcome to a response. An `Ok(None)` from a lookup becomes 404.

pub mod customers;
pub mod films;
pub mod health;
pub mod rentals;

pub use customers::{
    customer_categories_handler, customer_rentals_handler, customer_summary_handler,
    get_customer_handler, list_customers_handler,
};
pub use films::{
    film_summary_handler, get_film_handler, list_films_handler, most_rented_films_handler,
    most_watched_categories_handler,
};
pub use health::health_handler;
pub use rentals::{
    get_rental_handler, list_rentals_handler, monthly_revenue_handler, monthly_summary_handler,
};
