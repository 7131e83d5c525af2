//! Repository trait for rentals and monthly aggregates.

use crate::domain::entities::{MonthlyCount, MonthlyRevenue, Rental, RentalFilter};
use crate::domain::query::{AggregationWindow, Pagination};
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to rentals.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRentalRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-memory dataset
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError>;

    /// Lists rentals matching `filter`, ordered by id.
    async fn list(
        &self,
        filter: RentalFilter,
        pagination: Pagination,
    ) -> Result<Vec<Rental>, AppError>;

    async fn count(&self, filter: RentalFilter) -> Result<i64, AppError>;

    /// Rentals started inside `window`, one row per month that has any.
    async fn monthly_counts(&self, window: AggregationWindow)
    -> Result<Vec<MonthlyCount>, AppError>;

    /// Payment totals of rentals started inside `window`, grouped by rental month.
    async fn monthly_revenue(
        &self,
        window: AggregationWindow,
    ) -> Result<Vec<MonthlyRevenue>, AppError>;
}
