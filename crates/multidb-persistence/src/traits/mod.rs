//! Storage abstraction trait
//!
//! `UserStore` is the uniform interface every backend adapter implements.
//! Adapters are safe for concurrent use: each wraps its driver's internal
//! connection pool and holds no mutable state of its own.

use async_trait::async_trait;
use multidb_common::UserRecord;

use crate::model::StoreKind;

/// Uniform save/list operations over one physical store.
///
/// Each `save` and each `list_all` executes as a single auto-committing
/// unit; no multi-statement transactions are exposed. Errors are always
/// propagated to the caller, never swallowed or retried.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Which family of store this adapter targets
    fn kind(&self) -> StoreKind;

    /// Insert a new record with the given name; the backend assigns the id.
    async fn save(&self, name: &str) -> anyhow::Result<UserRecord>;

    /// Every persisted record, in backend-native order, as a snapshot
    /// captured at call time.
    async fn list_all(&self) -> anyhow::Result<Vec<UserRecord>>;

    /// Connectivity probe, also used as the eager reachability check at
    /// registry construction.
    async fn health_check(&self) -> anyhow::Result<()>;
}

impl std::fmt::Debug for dyn UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UserStore({})", self.kind())
    }
}
