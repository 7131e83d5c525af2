//! PostgreSQL implementation of the film repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use super::like_pattern;
use crate::domain::entities::{Film, FilmSummary, MostRentedFilm, WatchedCategory};
use crate::domain::query::{AggregationWindow, Pagination};
use crate::domain::repositories::FilmRepository;
use crate::error::AppError;

const FILM_COLUMNS: &str = r#"
    f.film_id,
    f.title,
    f.description,
    f.release_year,
    f.length,
    f.rating,
    f.rental_rate,
    (
        SELECT c.name
        FROM film_category fc
        JOIN category c ON c.category_id = fc.category_id
        WHERE fc.film_id = f.film_id
        ORDER BY c.name
        LIMIT 1
    ) AS category
FROM film f
"#;

#[derive(FromRow)]
struct FilmRow {
    film_id: i32,
    title: String,
    description: Option<String>,
    release_year: Option<i32>,
    length: Option<i32>,
    rating: Option<String>,
    rental_rate: Decimal,
    category: Option<String>,
}

impl From<FilmRow> for Film {
    fn from(row: FilmRow) -> Self {
        Film {
            id: row.film_id,
            title: row.title,
            description: row.description,
            release_year: row.release_year,
            length: row.length,
            rating: row.rating,
            rental_rate: row.rental_rate,
            category: row.category,
        }
    }
}

#[derive(FromRow)]
struct FilmCountRow {
    film_id: i32,
    title: String,
    rental_count: i64,
}

#[derive(FromRow)]
struct CategoryCountRow {
    category_id: i32,
    name: String,
    rental_count: i64,
}

#[derive(FromRow)]
struct FilmSummaryRow {
    film_id: i32,
    title: String,
    total_rentals: i64,
    open_rentals: i64,
    total_revenue: Decimal,
    last_rented_at: Option<NaiveDateTime>,
}

/// PostgreSQL repository for the film catalogue and rental rankings.
///
/// Window bounds are calendar dates; a rental belongs to the window when its
/// timestamp falls on or after `from` and before the day after `to`.
pub struct PgFilmRepository {
    pool: Arc<PgPool>,
}

impl PgFilmRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FilmRepository for PgFilmRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Film>, AppError> {
        let sql = format!("SELECT {FILM_COLUMNS} WHERE f.film_id = $1");

        let row = sqlx::query_as::<_, FilmRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Film::from))
    }

    async fn list(
        &self,
        title: Option<String>,
        pagination: Pagination,
    ) -> Result<Vec<Film>, AppError> {
        let sql = format!(
            "SELECT {FILM_COLUMNS} WHERE $1::text IS NULL OR f.title ILIKE $1 \
             ORDER BY f.film_id LIMIT $2 OFFSET $3"
        );

        let rows = sqlx::query_as::<_, FilmRow>(&sql)
            .bind(title.as_deref().map(like_pattern))
            .bind(i64::from(pagination.limit()))
            .bind(pagination.offset())
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Film::from).collect())
    }

    async fn count(&self, title: Option<String>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM film f WHERE $1::text IS NULL OR f.title ILIKE $1",
        )
        .bind(title.as_deref().map(like_pattern))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn most_rented(
        &self,
        window: AggregationWindow,
        limit: i64,
    ) -> Result<Vec<MostRentedFilm>, AppError> {
        let rows = sqlx::query_as::<_, FilmCountRow>(
            r#"
            SELECT f.film_id, f.title, COUNT(*) AS rental_count
            FROM rental_detail rd
            JOIN film f ON f.film_id = rd.film_id
            WHERE rd.rental_date >= $1::date
              AND rd.rental_date < $2::date + 1
            GROUP BY f.film_id, f.title
            ORDER BY rental_count DESC, f.film_id
            LIMIT $3
            "#,
        )
        .bind(window.from)
        .bind(window.to)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| MostRentedFilm {
                film_id: r.film_id,
                title: r.title,
                rental_count: r.rental_count,
            })
            .collect())
    }

    async fn most_watched_categories(
        &self,
        window: AggregationWindow,
        limit: i64,
    ) -> Result<Vec<WatchedCategory>, AppError> {
        let rows = sqlx::query_as::<_, CategoryCountRow>(
            r#"
            SELECT c.category_id, c.name, COUNT(*) AS rental_count
            FROM rental_detail rd
            JOIN film_category fc ON fc.film_id = rd.film_id
            JOIN category c ON c.category_id = fc.category_id
            WHERE rd.rental_date >= $1::date
              AND rd.rental_date < $2::date + 1
            GROUP BY c.category_id, c.name
            ORDER BY rental_count DESC, c.category_id
            LIMIT $3
            "#,
        )
        .bind(window.from)
        .bind(window.to)
        .bind(limit)
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

    async fn summary(&self, film_id: i32) -> Result<Option<FilmSummary>, AppError> {
        let row = sqlx::query_as::<_, FilmSummaryRow>(
            r#"
            SELECT
                f.film_id,
                f.title,
                COUNT(rd.rental_id) AS total_rentals,
                COUNT(rd.rental_id) FILTER (WHERE rd.return_date IS NULL) AS open_rentals,
                COALESCE(SUM(rd.amount), 0) AS total_revenue,
                MAX(rd.rental_date) AS last_rented_at
            FROM film f
            LEFT JOIN rental_detail rd ON rd.film_id = f.film_id
            WHERE f.film_id = $1
            GROUP BY f.film_id, f.title
            "#,
        )
        .bind(film_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| FilmSummary {
            film_id: r.film_id,
            title: r.title,
            total_rentals: r.total_rentals,
            open_rentals: r.open_rentals,
            total_revenue: r.total_revenue,
            last_rented_at: r.last_rented_at,
        }))
    }
}
