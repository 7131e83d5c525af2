//! Handlers for rental endpoints and monthly reports.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::pagination::{PageResponse, RentalListQuery, WindowParams};
use crate::api::dto::rental::RentalResponse;
use crate::api::dto::report::{MonthlyCountResponse, MonthlyRevenueResponse};
use crate::api::extract::{ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

/// `GET /api/rentals/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no rental has this id.
pub async fn get_rental_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<RentalResponse>, AppError> {
    let rental = state
        .rental_service
        .get_rental(id)
        .await?
        .ok_or_else(|| AppError::not_found("Rental not found", json!({ "id": id })))?;

    Ok(Json(rental.into()))
}

/// `GET /api/rentals`
///
/// # Query Parameters
///
/// - `page`, `limit` (optional): Pagination (defaults: 1, 10)
/// - `customerId`, `filmId` (optional): Filters, combined with AND
pub async fn list_rentals_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<RentalListQuery>,
) -> Result<Json<PageResponse<RentalResponse>>, AppError> {
    let page = state
        .rental_service
        .get_rentals(
            params.pagination.page(),
            params.pagination.limit(),
            params.customer_id,
            params.film_id,
        )
        .await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// `GET /api/rentals/monthly-summary?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn monthly_summary_handler(
    State(state): State<AppState>,
    ApiQuery(window): ApiQuery<WindowParams>,
) -> Result<Json<Vec<MonthlyCountResponse>>, AppError> {
    let rows = state
        .rental_service
        .get_monthly_rentals_summary(window.from_raw(), window.to_raw())
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// `GET /api/rentals/monthly-revenue?from=YYYY-MM-DD&to=YYYY-MM-DD`
pub async fn monthly_revenue_handler(
    State(state): State<AppState>,
    ApiQuery(window): ApiQuery<WindowParams>,
) -> Result<Json<Vec<MonthlyRevenueResponse>>, AppError> {
    let rows = state
        .rental_service
        .get_monthly_rental_revenue(window.from_raw(), window.to_raw())
        .await?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
