//! Domain layer containing entities, query values and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Customers, films, rentals and report rows
//! - [`query`] - Validated pagination and date-window values
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Validation and result shaping live in [`crate::application::services`]

pub mod entities;
pub mod query;
pub mod repositories;
