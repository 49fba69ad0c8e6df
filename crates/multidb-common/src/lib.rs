//! Multidb Common - shared types for the multi-backend user service
//!
//! This crate provides:
//! - `MultiDbError`: the application error taxonomy
//! - `UserRecord` / `RecordId`: the uniform wire shape of a persisted user

pub mod error;
pub mod model;

pub use error::MultiDbError;
pub use model::{RecordId, UserRecord};
