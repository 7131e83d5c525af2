//! Film catalogue reads and film/category rental reports.

use std::sync::Arc;

use crate::application::validation::{
    MOST_RENTED_MAX_LIMIT, normalize_name_filter, validate_bounded_limit, validate_date_range,
    validate_pagination,
};
use crate::domain::entities::report::{rank_categories, rank_films};
use crate::domain::entities::{Film, FilmSummary, MostRentedFilm, WatchedCategory};
use crate::domain::query::Page;
use crate::domain::repositories::FilmRepository;
use crate::error::AppError;

pub struct FilmService<R: FilmRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: FilmRepository + ?Sized> FilmService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up a single film. `Ok(None)` means the film does not exist.
    pub async fn get_film(&self, id: i32) -> Result<Option<Film>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists films ordered by id, optionally filtered by a title fragment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `limit` is below 1.
    pub async fn get_films(
        &self,
        page: i32,
        limit: i32,
        name: Option<&str>,
    ) -> Result<Page<Film>, AppError> {
        let pagination = validate_pagination(page, limit)?;
        let title = normalize_name_filter(name);

        let (items, total) = tokio::try_join!(
            self.repository.list(title.clone(), pagination),
            self.repository.count(title)
        )?;

        Ok(Page::new(items, pagination, total))
    }

    /// Films with the most rentals started between `from` and `to`, both inclusive.
    ///
    /// `limit` must lie in `1..=100`. A window whose `from` is after `to`
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an out-of-range limit or a
    /// malformed date.
    pub async fn get_most_rented_films(
        &self,
        limit: i32,
        from: &str,
        to: &str,
    ) -> Result<Vec<MostRentedFilm>, AppError> {
        let limit = validate_bounded_limit(limit, 1, Some(MOST_RENTED_MAX_LIMIT))?;
        let window = validate_date_range(from, to)?;

        tracing::debug!(limit, from = %window.from, to = %window.to, "Most rented films report");

        if window.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .repository
            .most_rented(window, i64::from(limit))
            .await?;

        Ok(rank_films(rows, limit as usize))
    }

    /// Categories with the most rentals started between `from` and `to`.
    ///
    /// Only `limit >= 1` is enforced; there is no upper cap.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a non-positive limit or a
    /// malformed date.
    pub async fn get_most_watched_categories(
        &self,
        limit: i32,
        from: &str,
        to: &str,
    ) -> Result<Vec<WatchedCategory>, AppError> {
        let limit = validate_bounded_limit(limit, 1, None)?;
        let window = validate_date_range(from, to)?;

        tracing::debug!(limit, from = %window.from, to = %window.to, "Most watched categories report");

        if window.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .repository
            .most_watched_categories(window, i64::from(limit))
            .await?;

        Ok(rank_categories(rows, limit as usize))
    }

    /// Lifetime rental aggregate. `Ok(None)` means the film does not exist.
    pub async fn get_film_summary(&self, film_id: i32) -> Result<Option<FilmSummary>, AppError> {
        self.repository.summary(film_id).await
    }
}
