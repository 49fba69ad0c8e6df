//! Relational storage backend (MySQL/PostgreSQL via SeaORM)
//!
//! Each `RelationalUserStore` is bound to exactly one database at one
//! connection URL and wraps SeaORM's connection pool. Two instances of
//! this adapter exist in the default configuration, one per relational
//! backend.

use async_trait::async_trait;
use multidb_common::UserRecord;
use sea_orm::{prelude::Expr, *};

use crate::entity::user;
use crate::model::{RelationalSettings, StoreKind};
use crate::traits::UserStore;

/// Relational adapter over one SeaORM `DatabaseConnection`.
pub struct RelationalUserStore {
    db: DatabaseConnection,
}

impl RelationalUserStore {
    /// Create an adapter over an already established connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Connect to the configured database and make sure the users table
    /// exists. A connection failure here is a fatal startup error.
    pub async fn connect(settings: &RelationalSettings) -> anyhow::Result<Self> {
        let url = settings.connect_url()?;
        let mut options = ConnectOptions::new(url);
        options.sqlx_logging(false);

        let db = Database::connect(options).await?;
        let store = Self::new(db);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    // Counterpart of the usual ddl-auto=update setup: the minimal schema is
    // created on first boot, later boots are a no-op.
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        let stmt = match self.db.get_database_backend() {
            DbBackend::MySql => {
                "CREATE TABLE IF NOT EXISTS users (\
                 id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY, \
                 name VARCHAR(255) NOT NULL)"
            }
            _ => {
                "CREATE TABLE IF NOT EXISTS users (\
                 id BIGSERIAL PRIMARY KEY, \
                 name VARCHAR(255) NOT NULL)"
            }
        };
        self.db.execute_unprepared(stmt).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for RelationalUserStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Relational
    }

    async fn save(&self, name: &str) -> anyhow::Result<UserRecord> {
        let row = user::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(UserRecord::serial(row.id, row.name))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<UserRecord>> {
        let rows = user::Entity::find().all(&self.db).await?;
        Ok(rows
            .into_iter()
            .map(|m| UserRecord::serial(m.id, m.name))
            .collect())
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        // Execute a simple query to verify connectivity
        user::Entity::find()
            .select_only()
            .column_as(Expr::cust("1"), "health")
            .into_tuple::<i32>()
            .one(&self.db)
            .await?;
        Ok(())
    }
}
