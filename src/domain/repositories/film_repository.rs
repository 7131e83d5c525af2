//! Repository trait for film catalogue and film-level reports.

use crate::domain::entities::{Film, FilmSummary, MostRentedFilm, WatchedCategory};
use crate::domain::query::{AggregationWindow, Pagination};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to films, categories, and rental aggregates grouped by them.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgFilmRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-memory dataset
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// Finds a film by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Film>, AppError>;

    /// Lists films ordered by id, optionally filtered by a lowercase title fragment.
    async fn list(
        &self,
        title: Option<String>,
        pagination: Pagination,
    ) -> Result<Vec<Film>, AppError>;

    /// Counts films matching the same title filter as [`Self::list`].
    async fn count(&self, title: Option<String>) -> Result<i64, AppError>;

    /// Rental counts per film for rentals started inside `window`.
    ///
    /// Returns at most `limit` rows, highest count first.
    async fn most_rented(
        &self,
        window: AggregationWindow,
        limit: i64,
    ) -> Result<Vec<MostRentedFilm>, AppError>;

    /// Rental counts per category for rentals started inside `window`.
    ///
    /// Returns at most `limit` rows, highest count first.
    async fn most_watched_categories(
        &self,
        window: AggregationWindow,
        limit: i64,
    ) -> Result<Vec<WatchedCategory>, AppError>;

    /// Lifetime aggregate, or `None` if the film does not exist.
    async fn summary(&self, film_id: i32) -> Result<Option<FilmSummary>, AppError>;
}
