//! PostgreSQL implementation of the customer repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::like_pattern;
use crate::domain::entities::{Customer, CustomerRental, CustomerSummary, WatchedCategory};
use crate::domain::query::Pagination;
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

const CUSTOMER_COLUMNS: &str = r#"
    c.customer_id,
    c.first_name,
    c.last_name,
    c.email,
    a.address,
    a.address2,
    ci.city,
    co.country,
    c.create_date,
    c.active
FROM customer c
JOIN address a ON a.address_id = c.address_id
JOIN city ci ON ci.city_id = a.city_id
JOIN country co ON co.country_id = ci.country_id
"#;

const NAME_FILTER: &str = r#"
WHERE $1::text IS NULL
   OR c.first_name ILIKE $1
   OR c.last_name ILIKE $1
   OR (c.first_name || ' ' || c.last_name) ILIKE $1
"#;

#[derive(FromRow)]
struct CustomerRow {
    customer_id: i32,
    first_name: String,
    last_name: String,
    email: Option<String>,
    address: String,
    address2: Option<String>,
    city: String,
    country: String,
    create_date: NaiveDateTime,
    active: bool,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.customer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            address: row.address,
            address2: row.address2,
            city: row.city,
            country: row.country,
            created_at: row.create_date,
            active: row.active,
        }
    }
}

#[derive(FromRow)]
struct CustomerRentalRow {
    rental_id: i32,
    film_id: i32,
    film_title: String,
    rental_date: NaiveDateTime,
    return_date: Option<NaiveDateTime>,
    amount: Option<Decimal>,
}

#[derive(FromRow)]
struct CategoryCountRow {
    category_id: i32,
    name: String,
    rental_count: i64,
}

#[derive(FromRow)]
struct CustomerSummaryRow {
    customer_id: i32,
    full_name: String,
    total_rentals: i64,
    open_rentals: i64,
    total_spent: Decimal,
    first_rental_at: Option<NaiveDateTime>,
    last_rental_at: Option<NaiveDateTime>,
}

/// PostgreSQL repository for customers and their rental history.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        let sql = format!("SELECT {CUSTOMER_COLUMNS} WHERE c.customer_id = $1");

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Customer::from))
    }

    async fn list(
        &self,
        name: Option<String>,
        pagination: Pagination,
    ) -> Result<Vec<Customer>, AppError> {
        let sql = format!(
            "SELECT {CUSTOMER_COLUMNS} {NAME_FILTER} ORDER BY c.customer_id LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(name.as_deref().map(like_pattern))
            .bind(i64::from(pagination.limit()))
            .bind(pagination.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn count(&self, name: Option<String>) -> Result<i64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM customer c {NAME_FILTER}");

        let count: i64 = sqlx::query_scalar(&sql)
            .bind(name.as_deref().map(like_pattern))
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_rentals(
        &self,
        customer_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<CustomerRental>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRentalRow>(
            r#"
            SELECT rd.rental_id, rd.film_id, f.title AS film_title,
                   rd.rental_date, rd.return_date, rd.amount
            FROM rental_detail rd
            JOIN film f ON f.film_id = rd.film_id
            WHERE rd.customer_id = $1
            ORDER BY rd.rental_date DESC, rd.rental_id DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(customer_id)
        .bind(i64::from(pagination.limit()))
        .bind(pagination.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| CustomerRental {
                rental_id: r.rental_id,
                film_id: r.film_id,
                film_title: r.film_title,
                rental_date: r.rental_date,
                return_date: r.return_date,
                amount: r.amount,
            })
            .collect())
    }

    async fn count_rentals(&self, customer_id: i32) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rental WHERE customer_id = $1")
            .bind(customer_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn watched_categories(&self, customer_id: i32) -> Result<Vec<WatchedCategory>, AppError> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            r#"
            SELECT c.category_id, c.name, COUNT(*) AS rental_count
            FROM rental_detail rd
            JOIN film_category fc ON fc.film_id = rd.film_id
            JOIN category c ON c.category_id = fc.category_id
            WHERE rd.customer_id = $1
            GROUP BY c.category_id, c.name
            ORDER BY rental_count DESC, c.category_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| WatchedCategory {
                category_id: r.category_id,
                name: r.name,
                rental_count: r.rental_count,
            })
            .collect())
    }

    async fn summary(&self, customer_id: i32) -> Result<Option<CustomerSummary>, AppError> {
        let row = sqlx::query_as::<_, CustomerSummaryRow>(
            r#"
            SELECT
                c.customer_id,
                c.first_name || ' ' || c.last_name AS full_name,
                COUNT(rd.rental_id) AS total_rentals,
                COUNT(rd.rental_id) FILTER (WHERE rd.return_date IS NULL) AS open_rentals,
                COALESCE(SUM(rd.amount), 0) AS total_spent,
                MIN(rd.rental_date) AS first_rental_at,
                MAX(rd.rental_date) AS last_rental_at
            FROM customer c
            LEFT JOIN rental_detail rd ON rd.customer_id = c.customer_id
            WHERE c.customer_id = $1
            GROUP BY c.customer_id, c.first_name, c.last_name
            "#,
        )
        .bind(customer_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| CustomerSummary {
            customer_id: r.customer_id,
            full_name: r.full_name,
            total_rentals: r.total_rentals,
            open_rentals: r.open_rentals,
            total_spent: r.total_spent,
            first_rental_at: r.first_rental_at,
            last_rental_at: r.last_rental_at,
        }))
    }
}
