//! Handlers for film endpoints and film/category reports.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::film::{FilmResponse, FilmSummaryResponse};
use crate::api::dto::pagination::{ListQuery, PageResponse, ReportQuery};
use crate::api::dto::report::{CategoryCountResponse, MostRentedFilmResponse};
use crate::api::extract::{ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

fn film_not_found(id: i32) -> AppError {
    AppError::not_found("Film not found", json!({ "id": id }))
}

/// `GET /api/films/{id}`
pub async fn get_film_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<FilmResponse>, AppError> {
    let film = state
        .film_service
        .get_film(id)
        .await?
        .ok_or_else(|| film_not_found(id))?;

    Ok(Json(film.into()))
}

/// `GET /api/films`
///
/// Same pagination contract as `/api/customers`; `name` filters on title.
pub async fn list_films_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListQuery>,
) -> Result<Json<PageResponse<FilmResponse>>, AppError> {
    let page = state
        .film_service
        .get_films(
            params.pagination.page(),
            params.pagination.limit(),
            params.name.as_deref(),
        )
        .await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// `GET /api/films/most-rented`
///
/// # Query Parameters
///
/// - `limit` (optional): Number of films, 1 to 100 (default: 10)
/// - `from`, `to`: Inclusive window in `YYYY-MM-DD` format
///
/// # Errors
///
/// Returns 400 Bad Request for an out-of-range limit or a missing or
/// malformed date.
pub async fn most_rented_films_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ReportQuery>,
) -> Result<Json<Vec<MostRentedFilmResponse>>, AppError> {
    let rows = state
        .film_service
        .get_most_rented_films(
            params.limit(),
            params.window.from_raw(),
            params.window.to_raw(),
        )
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /api/films/most-watched-categories`
///
/// Like `/api/films/most-rented` but grouped by category, and `limit` has no
/// upper bound.
pub async fn most_watched_categories_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ReportQuery>,
) -> Result<Json<Vec<CategoryCountResponse>>, AppError> {
    let rows = state
        .film_service
        .get_most_watched_categories(
            params.limit(),
            params.window.from_raw(),
            params.window.to_raw(),
        )
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /api/films/{id}/summary`
pub async fn film_summary_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<FilmSummaryResponse>, AppError> {
    let summary = state
        .film_service
        .get_film_summary(id)
        .await?
        .ok_or_else(|| film_not_found(id))?;

    Ok(Json(summary.into()))
}
