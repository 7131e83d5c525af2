//! Data Transfer Objects for API requests and responses.
//!
//! Query structs deserialize raw parameters; response structs mirror the
//! domain read models with wire-friendly field types.

pub mod customer;
pub mod film;
pub mod health;
pub mod pagination;
pub mod rental;
pub mod report;
