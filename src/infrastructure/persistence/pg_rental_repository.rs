//! PostgreSQL implementation of the rental repository.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{MonthlyCount, MonthlyRevenue, Rental, RentalFilter};
use crate::domain::query::{AggregationWindow, Pagination};
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

#[derive(FromRow)]
struct RentalRow {
    rental_id: i32,
    customer_id: i32,
    film_id: i32,
    rental_date: NaiveDateTime,
    return_date: Option<NaiveDateTime>,
    amount: Option<Decimal>,
}

impl From<RentalRow> for Rental {
    fn from(row: RentalRow) -> Self {
        Rental {
            id: row.rental_id,
            customer_id: row.customer_id,
            film_id: row.film_id,
            rental_date: row.rental_date,
            return_date: row.return_date,
            amount: row.amount,
        }
    }
}

#[derive(FromRow)]
struct MonthlyCountRow {
    month: NaiveDate,
    rentals: i64,
    open_rentals: i64,
}

#[derive(FromRow)]
struct MonthlyRevenueRow {
    month: NaiveDate,
    amount: Decimal,
}

/// PostgreSQL repository for rentals, reading through the `rental_detail` view.
pub struct PgRentalRepository {
    pool: Arc<PgPool>,
}

impl PgRentalRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalRepository for PgRentalRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Rental>, AppError> {
        let row = sqlx::query_as::<_, RentalRow>(
            r#"
            SELECT rental_id, customer_id, film_id, rental_date, return_date, amount
            FROM rental_detail
            WHERE rental_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Rental::from))
    }

    async fn list(
        &self,
        filter: RentalFilter,
        pagination: Pagination,
    ) -> Result<Vec<Rental>, AppError> {
        let rows = sqlx::query_as::<_, RentalRow>(
            r#"
            SELECT rental_id, customer_id, film_id, rental_date, return_date, amount
            FROM rental_detail
            WHERE ($1::int IS NULL OR customer_id = $1)
              AND ($2::int IS NULL OR film_id = $2)
            ORDER BY rental_id
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(filter.customer_id)
        .bind(filter.film_id)
        .bind(i64::from(pagination.limit()))
        .bind(pagination.offset())
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Rental::from).collect())
    }

    async fn count(&self, filter: RentalFilter) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM rental_detail
            WHERE ($1::int IS NULL OR customer_id = $1)
              AND ($2::int IS NULL OR film_id = $2)
            "#,
        )
        .bind(filter.customer_id)
        .bind(filter.film_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn monthly_counts(
        &self,
        window: AggregationWindow,
    ) -> Result<Vec<MonthlyCount>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyCountRow>(
            r#"
            SELECT
                date_trunc('month', rental_date)::date AS month,
                COUNT(*) AS rentals,
                COUNT(*) FILTER (WHERE return_date IS NULL) AS open_rentals
            FROM rental_detail
            WHERE rental_date >= $1::date
              AND rental_date < $2::date + 1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(window.from)
        .bind(window.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MonthlyCount {
                month: r.month,
                rentals: r.rentals,
                open_rentals: r.open_rentals,
            })
            .collect())
    }

    async fn monthly_revenue(
        &self,
        window: AggregationWindow,
    ) -> Result<Vec<MonthlyRevenue>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyRevenueRow>(
            r#"
            SELECT
                date_trunc('month', rental_date)::date AS month,
                COALESCE(SUM(amount), 0) AS amount
            FROM rental_detail
            WHERE rental_date >= $1::date
              AND rental_date < $2::date + 1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(window.from)
        .bind(window.to)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MonthlyRevenue {
                month: r.month,
                amount: r.amount,
            })
            .collect())
    }
}
