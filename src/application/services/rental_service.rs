//! Rental reads and monthly aggregates.

use std::sync::Arc;

use crate::application::validation::{validate_date_range, validate_pagination};
use crate::domain::entities::{MonthlyCount, MonthlyRevenue, Rental, RentalFilter};
use crate::domain::query::Page;
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

/// Service for rental lookups and month-by-month reports.
pub struct RentalService<R: RentalRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: RentalRepository + ?Sized> RentalService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn get_rental(&self, id: i32) -> Result<Option<Rental>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists rentals ordered by id. `customer_id` and `film_id` narrow the
    /// result when given and combine with AND.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `limit` is below 1.
    pub async fn get_rentals(
        &self,
        page: i32,
        limit: i32,
        customer_id: Option<i32>,
        film_id: Option<i32>,
    ) -> Result<Page<Rental>, AppError> {
        let pagination = validate_pagination(page, limit)?;
        let filter = RentalFilter {
            customer_id,
            film_id,
        };

        let (items, total) = tokio::try_join!(
            self.repository.list(filter, pagination),
            self.repository.count(filter)
        )?;

        Ok(Page::new(items, pagination, total))
    }

    /// Rental counts per calendar month, ascending. Months without rentals
    /// are left out.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either date is malformed.
    pub async fn get_monthly_rentals_summary(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        let window = validate_date_range(from, to)?;

        tracing::debug!(from = %window.from, to = %window.to, "Monthly rentals report");

        if window.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = self.repository.monthly_counts(window).await?;
        rows.retain(|row| row.rentals > 0);
        rows.sort_by_key(|row| row.month);
        Ok(rows)
    }

    /// Payment totals per calendar month of the rental date, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either date is malformed.
    pub async fn get_monthly_rental_revenue(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Vec<MonthlyRevenue>, AppError> {
        let window = validate_date_range(from, to)?;

        tracing::debug!(from = %window.from, to = %window.to, "Monthly revenue report");

        if window.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = self.repository.monthly_revenue(window).await?;
        rows.sort_by_key(|row| row.month);
        Ok(rows)
    }
}
