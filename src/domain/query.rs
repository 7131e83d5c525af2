//! Validated query values shared by services and repositories.
//!
//! [`Pagination`] and [`AggregationWindow`] are produced by
//! [`crate::application::validation`]; repositories can rely on their
//! invariants without re-checking.

use chrono::{NaiveDate, NaiveDateTime};

/// A validated page request. Both `page` and `limit` are `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i32,
    limit: i32,
}

impl Pagination {
    /// Builds a pagination value, returning `None` unless both values are positive.
    pub fn new(page: i32, limit: i32) -> Option<Self> {
        (page >= 1 && limit >= 1).then_some(Self { page, limit })
    }

    pub fn page(&self) -> i32 {
        self.page
    }

    pub fn limit(&self) -> i32 {
        self.limit
    }

    /// Number of rows to skip, computed in 64 bits so `page * limit` cannot overflow.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }
}

/// Inclusive calendar-date interval scoping a report.
///
/// `from` may be after `to`; such a window contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl AggregationWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }

    /// Whether `timestamp` falls on a day inside the window, both ends included.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        let day = timestamp.date();
        day >= self.from && day <= self.to
    }
}

/// One page of rows plus the number of rows matching across all pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: i32,
    pub total: i64,
}

impl<T> Page<T> {
    /// Assembles a page, holding `items.len() <= limit` and `total >= items.len()`.
    pub fn new(mut items: Vec<T>, pagination: Pagination, total: i64) -> Self {
        items.truncate(pagination.limit() as usize);
        let total = total.max(items.len() as i64);

        Self {
            items,
            current_page: pagination.page(),
            total,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total: self.total,
        }
    }
}
