//! Validation of pagination, limit and date-range parameters.
//!
//! Every listing and report operation funnels its raw inputs through these
//! functions before touching a repository. Failures are returned as
//! [`ParamError`] values naming the offending fields.

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::query::{AggregationWindow, Pagination};

/// Wire format accepted for report dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound on `limit` for the most-rented-films report.
pub const MOST_RENTED_MAX_LIMIT: i32 = 100;

/// A rejected parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("{} must be greater than zero", .fields.join(" and "))]
    NonPositive { fields: Vec<&'static str> },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
    },

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: i32 },

    #[error("{} must be a date in YYYY-MM-DD format", .fields.join(" and "))]
    InvalidDate { fields: Vec<&'static str> },
}

impl ParamError {
    /// Names of the parameters that failed validation.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            ParamError::NonPositive { fields } | ParamError::InvalidDate { fields } => {
                fields.clone()
            }
            ParamError::OutOfRange { field, .. } | ParamError::BelowMinimum { field, .. } => {
                vec![*field]
            }
        }
    }
}

/// Checks that `page` and `limit` are both `>= 1`. There is no upper bound.
pub fn validate_pagination(page: i32, limit: i32) -> Result<Pagination, ParamError> {
    let mut fields = Vec::new();
    if page < 1 {
        fields.push("page");
    }
    if limit < 1 {
        fields.push("limit");
    }

    if !fields.is_empty() {
        return Err(ParamError::NonPositive { fields });
    }

    Pagination::new(page, limit).ok_or(ParamError::NonPositive {
        fields: vec!["page", "limit"],
    })
}

/// Checks `min <= limit` and, when `max` is given, `limit <= max`.
pub fn validate_bounded_limit(limit: i32, min: i32, max: Option<i32>) -> Result<i32, ParamError> {
    match max {
        Some(max) if limit < min || limit > max => Err(ParamError::OutOfRange {
            field: "limit",
            min,
            max,
        }),
        None if limit < min => Err(ParamError::BelowMinimum {
            field: "limit",
            min,
        }),
        _ => Ok(limit),
    }
}

/// Parses both ends of a report window.
///
/// Each value must be a real calendar date written exactly as `YYYY-MM-DD`.
/// No ordering is enforced between the two; see [`AggregationWindow::is_empty`].
pub fn validate_date_range(from: &str, to: &str) -> Result<AggregationWindow, ParamError> {
    match (parse_date(from), parse_date(to)) {
        (Some(from), Some(to)) => Ok(AggregationWindow::new(from, to)),
        (from, to) => {
            let mut fields = Vec::new();
            if from.is_none() {
                fields.push("from");
            }
            if to.is_none() {
                fields.push("to");
            }
            Err(ParamError::InvalidDate { fields })
        }
    }
}

/// Parses a strict, zero-padded ISO calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let well_formed = raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Trims a name filter and lowercases it. Blank filters become `None`.
pub fn normalize_name_filter(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase)
}
