//! Wiring of repository implementations for the selected storage backend.

use std::sync::Arc;

use sqlx::PgPool;

use super::{
    InMemoryStore, PgCustomerRepository, PgFilmRepository, PgHealthRepository,
    PgRentalRepository,
};
use crate::domain::repositories::{
    CustomerRepository, FilmRepository, HealthRepository, RentalRepository,
};

/// One implementation of every repository trait, ready to hand to services.
#[derive(Clone)]
pub struct Repositories {
    pub customers: Arc<dyn CustomerRepository>,
    pub films: Arc<dyn FilmRepository>,
    pub rentals: Arc<dyn RentalRepository>,
    pub health: Arc<dyn HealthRepository>,
}

impl Repositories {
    /// PostgreSQL repositories sharing one connection pool.
    pub fn postgres(pool: Arc<PgPool>) -> Self {
        Self {
            customers: Arc::new(PgCustomerRepository::new(pool.clone())),
            films: Arc::new(PgFilmRepository::new(pool.clone())),
            rentals: Arc::new(PgRentalRepository::new(pool.clone())),
            health: Arc::new(PgHealthRepository::new(pool)),
        }
    }

    /// Every trait served by the same in-memory store.
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self {
            customers: store.clone(),
            films: store.clone(),
            rentals: store.clone(),
            health: store,
        }
    }
}
