//! Query parameters shared by listing and report endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::query::Page;

pub const DEFAULT_PAGE: i32 = 1;
pub const DEFAULT_LIMIT: i32 = 10;

/// Pagination query parameters.
///
/// Values are parsed as signed integers so that `page=0` or `limit=-5`
/// reach validation and come back as a validation error rather than a parse
/// failure. Range checks happen in [`crate::application::validation`].
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i32>,
}

impl PageParams {
    pub fn page(&self) -> i32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> i32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Report window parameters, kept as raw strings for strict date validation.
///
/// A missing bound is passed on as an empty string and rejected there.
#[derive(Debug, Default, Deserialize)]
pub struct WindowParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl WindowParams {
    pub fn from_raw(&self) -> &str {
        self.from.as_deref().unwrap_or_default()
    }

    pub fn to_raw(&self) -> &str {
        self.to.as_deref().unwrap_or_default()
    }
}

/// `GET /customers` and `GET /films`.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub pagination: PageParams,

    pub name: Option<String>,
}

/// `GET /films/most-rented` and `GET /films/most-watched-categories`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<i32>,

    #[serde(flatten)]
    pub window: WindowParams,
}

impl ReportQuery {
    pub fn limit(&self) -> i32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// `GET /rentals`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct RentalListQuery {
    #[serde(flatten)]
    pub pagination: PageParams,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "customerId")]
    pub customer_id: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, rename = "filmId")]
    pub film_id: Option<i32>,
}

/// One page of a listing.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub current_page: i32,
    pub total: i64,
    pub items: Vec<T>,
}

impl<T> PageResponse<T> {
    pub fn from_page<U>(page: Page<U>) -> Self
    where
        T: From<U>,
    {
        let page = page.map(T::from);
        Self {
            current_page: page.current_page,
            total: page.total,
            items: page.items,
        }
    }
}
