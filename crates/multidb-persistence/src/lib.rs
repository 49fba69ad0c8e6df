//! Multidb Persistence - storage backend adapters and the backend registry
//!
//! This crate provides:
//! - The `UserStore` trait: uniform save/list semantics over heterogeneous stores
//! - SeaORM-backed relational adapter (MySQL/PostgreSQL)
//! - MongoDB-backed document adapter
//! - `BackendRegistry`: startup-built, read-only name-to-adapter mapping

pub mod document;
pub mod entity;
pub mod model;
pub mod registry;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export the store trait
pub use traits::UserStore;

// Re-export adapters
pub use document::DocumentUserStore;
pub use sql::RelationalUserStore;

// Re-export registry
pub use registry::{BackendHandle, BackendRegistry};

// Re-export configuration model
pub use model::{
    BackendConfig, BackendSettings, DocumentSettings, RelationalSettings, StoreKind,
};
