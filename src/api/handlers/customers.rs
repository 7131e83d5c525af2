//! Handlers for customer endpoints.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::customer::{
    CustomerRentalResponse, CustomerResponse, CustomerSummaryResponse,
};
use crate::api::dto::pagination::{ListQuery, PageParams, PageResponse};
use crate::api::dto::report::CategoryCountResponse;
use crate::api::extract::{ApiPath, ApiQuery};
use crate::error::AppError;
use crate::state::AppState;

fn customer_not_found(id: i32) -> AppError {
    AppError::not_found("Customer not found", json!({ "id": id }))
}

/// `GET /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no customer has this id.
pub async fn get_customer_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customer_service
        .get_customer(id)
        .await?
        .ok_or_else(|| customer_not_found(id))?;

    Ok(Json(customer.into()))
}

/// `GET /api/customers`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `limit` (optional): Items per page (default: 10)
/// - `name` (optional): Case-insensitive fragment of first, last or full name
///
/// # Errors
///
/// Returns 400 Bad Request if `page` or `limit` is below 1.
pub async fn list_customers_handler(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListQuery>,
) -> Result<Json<PageResponse<CustomerResponse>>, AppError> {
    let page = state
        .customer_service
        .get_customers(
            params.pagination.page(),
            params.pagination.limit(),
            params.name.as_deref(),
        )
        .await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// `GET /api/customers/{id}/rentals`
///
/// Rental history, newest first. Unknown customers yield an empty page.
pub async fn customer_rentals_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(params): ApiQuery<PageParams>,
) -> Result<Json<PageResponse<CustomerRentalResponse>>, AppError> {
    let page = state
        .customer_service
        .get_customer_rentals(id, params.page(), params.limit())
        .await?;

    Ok(Json(PageResponse::from_page(page)))
}

/// `GET /api/customers/{id}/categories`
pub async fn customer_categories_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<Vec<CategoryCountResponse>>, AppError> {
    let categories = state
        .customer_service
        .get_customer_watched_categories(id)
        .await?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// `GET /api/customers/{id}/summary`
///
/// # Errors
///
/// Returns 404 Not Found if no customer has this id.
pub async fn customer_summary_handler(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Json<CustomerSummaryResponse>, AppError> {
    let summary = state
        .customer_service
        .get_customer_summary(id)
        .await?
        .ok_or_else(|| customer_not_found(id))?;

    Ok(Json(summary.into()))
}
