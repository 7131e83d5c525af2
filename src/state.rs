//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CustomerService, FilmService, RentalService};
use crate::domain::repositories::{
    CustomerRepository, FilmRepository, HealthRepository, RentalRepository,
};
use crate::infrastructure::persistence::Repositories;

/// Services behind `Arc`, cheap to clone per request.
///
/// Services hold no mutable state, so handlers share them without locking.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<dyn CustomerRepository>>,
    pub film_service: Arc<FilmService<dyn FilmRepository>>,
    pub rental_service: Arc<RentalService<dyn RentalRepository>>,
    pub health: Arc<dyn HealthRepository>,
}

impl AppState {
    pub fn new(repositories: Repositories) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(repositories.customers)),
            film_service: Arc::new(FilmService::new(repositories.films)),
            rental_service: Arc::new(RentalService::new(repositories.rentals)),
            health: repositories.health,
        }
    }
}
