//! Persistence providers for the repository traits.
//!
//! # Providers
//!
//! - [`PgCustomerRepository`], [`PgFilmRepository`], [`PgRentalRepository`],
//!   [`PgHealthRepository`] - PostgreSQL via SQLx
//! - [`InMemoryStore`] - All four traits over a loaded [`Dataset`]
//!
//! [`Repositories`] bundles one implementation of each trait for wiring.

pub mod factory;
pub mod memory_store;
pub mod pg_customer_repository;
pub mod pg_film_repository;
pub mod pg_health_repository;
pub mod pg_rental_repository;

pub use factory::Repositories;
pub use memory_store::{Dataset, FilmRecord, InMemoryStore};
pub use pg_customer_repository::PgCustomerRepository;
pub use pg_film_repository::PgFilmRepository;
pub use pg_health_repository::PgHealthRepository;
pub use pg_rental_repository::PgRentalRepository;

/// Builds an `ILIKE` pattern matching `fragment` anywhere, with `%`, `_` and
/// `\` in the fragment taken literally.
pub(crate) fn like_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
