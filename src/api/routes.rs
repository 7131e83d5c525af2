//! API route configuration.

use crate::api::handlers::{
    customer_categories_handler, customer_rentals_handler, customer_summary_handler,
    film_summary_handler, get_customer_handler, get_film_handler, get_rental_handler,
    list_customers_handler, list_films_handler, list_rentals_handler,
    monthly_revenue_handler, monthly_summary_handler, most_rented_films_handler,
    most_watched_categories_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All read-only API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /customers`                        - List customers (paginated, name filter)
/// - `GET /customers/{id}`                   - Single customer
/// - `GET /customers/{id}/rentals`           - Customer rental history (paginated)
/// - `GET /customers/{id}/categories`        - Categories the customer rented from
/// - `GET /customers/{id}/summary`           - Customer lifetime aggregate
/// - `GET /films`                            - List films (paginated, title filter)
/// - `GET /films/most-rented`                - Top films in a date window
/// - `GET /films/most-watched-categories`    - Top categories in a date window
/// - `GET /films/{id}`                       - Single film
/// - `GET /films/{id}/summary`               - Film lifetime aggregate
/// - `GET /rentals`                          - List rentals (paginated, customer/film filter)
/// - `GET /rentals/monthly-summary`          - Rental counts per month
/// - `GET /rentals/monthly-revenue`          - Payment totals per month
/// - `GET /rentals/{id}`                     - Single rental
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(list_customers_handler))
        .route("/customers/{id}", get(get_customer_handler))
        .route("/customers/{id}/rentals", get(customer_rentals_handler))
        .route("/customers/{id}/categories", get(customer_categories_handler))
        .route("/customers/{id}/summary", get(customer_summary_handler))
        .route("/films", get(list_films_handler))
        .route("/films/most-rented", get(most_rented_films_handler))
        .route(
            "/films/most-watched-categories",
            get(most_watched_categories_handler),
        )
        .route("/films/{id}", get(get_film_handler))
        .route("/films/{id}/summary", get(film_summary_handler))
        .route("/rentals", get(list_rentals_handler))
        .route("/rentals/monthly-summary", get(monthly_summary_handler))
        .route("/rentals/monthly-revenue", get(monthly_revenue_handler))
        .route("/rentals/{id}", get(get_rental_handler))
}
