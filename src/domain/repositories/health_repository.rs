//! Storage liveness probe used by the health endpoint.

use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Name of the storage backend, e.g. `"postgres"`.
    fn backend(&self) -> &'static str;

    /// Round-trips to the storage backend.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backend is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
