//! Customer lookup, listing and per-customer reports.

use std::sync::Arc;

use crate::application::validation::{normalize_name_filter, validate_pagination};
use crate::domain::entities::report::rank_categories;
use crate::domain::entities::{Customer, CustomerRental, CustomerSummary, WatchedCategory};
use crate::domain::query::Page;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// Service for reading customers and their rental history.
///
/// Pagination is validated before any repository call, so rejected requests
/// never reach storage.
pub struct CustomerService<R: CustomerRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: CustomerRepository + ?Sized> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Looks up a single customer. `Ok(None)` means the customer does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customer(&self, id: i32) -> Result<Option<Customer>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// Lists customers page by page, optionally filtered by name.
    ///
    /// The filter is a case-insensitive substring match on first, last or full
    /// name; a blank filter matches everyone. `total` counts filtered rows.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `limit` is below 1.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customers(
        &self,
        page: i32,
        limit: i32,
        name: Option<&str>,
    ) -> Result<Page<Customer>, AppError> {
        let pagination = validate_pagination(page, limit)?;
        let name = normalize_name_filter(name);

        let (items, total) = tokio::try_join!(
            self.repository.list(name.clone(), pagination),
            self.repository.count(name)
        )?;

        Ok(Page::new(items, pagination, total))
    }

    /// Lists the rentals of one customer, newest first.
    ///
    /// Unknown customers yield an empty page with `total = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `limit` is below 1.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customer_rentals(
        &self,
        customer_id: i32,
        page: i32,
        limit: i32,
    ) -> Result<Page<CustomerRental>, AppError> {
        let pagination = validate_pagination(page, limit)?;

        let (items, total) = tokio::try_join!(
            self.repository.list_rentals(customer_id, pagination),
            self.repository.count_rentals(customer_id)
        )?;

        Ok(Page::new(items, pagination, total))
    }

    /// Categories the customer has rented from, most rented first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customer_watched_categories(
        &self,
        customer_id: i32,
    ) -> Result<Vec<WatchedCategory>, AppError> {
        let rows = self.repository.watched_categories(customer_id).await?;
        let len = rows.len();
        Ok(rank_categories(rows, len))
    }

    /// Lifetime rental aggregate. `Ok(None)` means the customer does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_customer_summary(
        &self,
        customer_id: i32,
    ) -> Result<Option<CustomerSummary>, AppError> {
        self.repository.summary(customer_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCustomerRepository;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn create_test_customer(id: i32, first: &str, last: &str) -> Customer {
        Customer {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: Some(format!("{}.{}@email.com", first, last).to_lowercase()),
            address: "123 Main Street".to_string(),
            address2: Some(format!("Apt #{id}")),
            city: "Orlando".to_string(),
            country: "USA".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            active: true,
        }
    }

    fn three_customers() -> Vec<Customer> {
        vec![
            create_test_customer(1, "John", "Doe"),
            create_test_customer(2, "Carl", "Mitch"),
            create_test_customer(3, "Peter", "Blake"),
        ]
    }

    #[tokio::test]
    async fn test_get_customer_found() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| Ok(Some(create_test_customer(id, "John", "Doe"))));

        let service = CustomerService::new(Arc::new(mock_repo));
        let customer = service.get_customer(1).await.unwrap();

        assert_eq!(customer.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_get_customer_not_found_is_not_an_error() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = CustomerService::new(Arc::new(mock_repo));
        let result = service.get_customer(1).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_get_customers_returns_all_rows_in_order() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_list()
            .withf(|name, pagination| name.is_none() && pagination.offset() == 0)
            .times(1)
            .returning(|_, _| Ok(three_customers()));
        mock_repo
            .expect_count()
            .times(1)
            .returning(|_| Ok(3));

        let service = CustomerService::new(Arc::new(mock_repo));
        let page = service.get_customers(1, 10, Some("")).await.unwrap();

        assert_eq!(page.current_page, 1);
        assert_eq!(page.total, 3);
        assert_eq!(page.items, three_customers());
    }

    #[tokio::test]
    async fn test_get_customers_passes_normalized_filter() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_list()
            .withf(|name, pagination| {
                name.as_deref() == Some("doe") && pagination.page() == 2 && pagination.limit() == 5
            })
            .times(1)
            .returning(|_, _| Ok(vec![]));
        mock_repo
            .expect_count()
            .withf(|name| name.as_deref() == Some("doe"))
            .times(1)
            .returning(|_| Ok(1));

        let service = CustomerService::new(Arc::new(mock_repo));
        let page = service.get_customers(2, 5, Some("  DOE ")).await.unwrap();

        assert_eq!(page.current_page, 2);
        assert_eq!(page.total, 1);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_customers_rejects_bad_pagination_without_storage_calls() {
        for (page, limit) in [(0, 0), (0, 10), (10, 0), (-100, 20), (20, -100)] {
            let mut mock_repo = MockCustomerRepository::new();
            mock_repo.expect_list().times(0);
            mock_repo.expect_count().times(0);

            let service = CustomerService::new(Arc::new(mock_repo));
            let result = service.get_customers(page, limit, Some("")).await;

            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "page={page} limit={limit}"
            );
        }
    }

    #[tokio::test]
    async fn test_get_customer_rentals_unknown_customer_is_empty() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_list_rentals()
            .times(1)
            .returning(|_, _| Ok(vec![]));
        mock_repo
            .expect_count_rentals()
            .times(1)
            .returning(|_| Ok(0));

        let service = CustomerService::new(Arc::new(mock_repo));
        let page = service.get_customer_rentals(999, 1, 10).await.unwrap();

        assert_eq!(page.total, 0);
        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_customer_rentals_rejects_bad_pagination() {
        for (page, limit) in [
            (0, 10),
            (10, 0),
            (0, 0),
            (i32::MIN, 10),
            (10, i32::MIN),
            (i32::MIN, i32::MIN),
        ] {
            let mut mock_repo = MockCustomerRepository::new();
            mock_repo.expect_list_rentals().times(0);
            mock_repo.expect_count_rentals().times(0);

            let service = CustomerService::new(Arc::new(mock_repo));
            let result = service.get_customer_rentals(1, page, limit).await;

            assert!(matches!(result, Err(AppError::Validation { .. })));
        }
    }

    #[tokio::test]
    async fn test_watched_categories_are_ranked() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_watched_categories()
            .times(1)
            .returning(|_| {
                Ok(vec![
                    WatchedCategory {
                        category_id: 5,
                        name: "Comedy".to_string(),
                        rental_count: 1,
                    },
                    WatchedCategory {
                        category_id: 1,
                        name: "Action".to_string(),
                        rental_count: 3,
                    },
                    WatchedCategory {
                        category_id: 2,
                        name: "Animation".to_string(),
                        rental_count: 1,
                    },
                ])
            });

        let service = CustomerService::new(Arc::new(mock_repo));
        let categories = service.get_customer_watched_categories(1).await.unwrap();

        let ids: Vec<i32> = categories.iter().map(|c| c.category_id).collect();
        assert_eq!(ids, vec![1, 2, 5]);
    }

    #[tokio::test]
    async fn test_get_customer_summary() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_summary()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|id| {
                Ok(Some(CustomerSummary {
                    customer_id: id,
                    full_name: "John Doe".to_string(),
                    total_rentals: 2,
                    open_rentals: 1,
                    total_spent: Decimal::new(598, 2),
                    first_rental_at: None,
                    last_rental_at: None,
                }))
            });
        mock_repo
            .expect_summary()
            .withf(|id| *id == 2)
            .times(1)
            .returning(|_| Ok(None));

        let service = CustomerService::new(Arc::new(mock_repo));

        let summary = service.get_customer_summary(1).await.unwrap().unwrap();
        assert_eq!(summary.total_rentals, 2);
        assert_eq!(summary.total_spent, Decimal::new(598, 2));

        assert!(service.get_customer_summary(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut mock_repo = MockCustomerRepository::new();
        mock_repo
            .expect_list()
            .returning(|_, _| Err(AppError::internal("Database error", serde_json::json!({}))));
        mock_repo.expect_count().returning(|_| Ok(0));

        let service = CustomerService::new(Arc::new(mock_repo));
        let result = service.get_customers(1, 10, None).await;

        assert!(matches!(result, Err(AppError::Internal { .. })));
    }
}
