//! Repository trait for customer data access.

use crate::domain::entities::{Customer, CustomerRental, CustomerSummary, WatchedCategory};
use crate::domain::query::Pagination;
use crate::error::AppError;
use async_trait::async_trait;

/// Read access to customers and their rental history.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryStore`] - In-memory dataset
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Finds a customer by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Customer))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError>;

    /// Lists customers ordered by id, optionally filtered by a lowercase name fragment.
    async fn list(
        &self,
        name: Option<String>,
        pagination: Pagination,
    ) -> Result<Vec<Customer>, AppError>;

    /// Counts customers matching the same name filter as [`Self::list`].
    async fn count(&self, name: Option<String>) -> Result<i64, AppError>;

    /// Lists one customer's rentals, newest first.
    async fn list_rentals(
        &self,
        customer_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<CustomerRental>, AppError>;

    /// Counts one customer's rentals. Unknown customers have zero.
    async fn count_rentals(&self, customer_id: i32) -> Result<i64, AppError>;

    /// Categories the customer has rented from, with rental counts.
    async fn watched_categories(&self, customer_id: i32)
    -> Result<Vec<WatchedCategory>, AppError>;

    /// Lifetime aggregate, or `None` if the customer does not exist.
    async fn summary(&self, customer_id: i32) -> Result<Option<CustomerSummary>, AppError>;
}
