//! Document storage backend (MongoDB)
//!
//! No schema is declared ahead of time; the collection is created
//! implicitly by the store on the first write. Identifiers are
//! driver-assigned ObjectIds, surfaced to callers as their hex form.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{doc, oid::ObjectId},
    options::ClientOptions,
};
use multidb_common::UserRecord;
use serde::{Deserialize, Serialize};

use crate::model::{DocumentSettings, StoreKind};
use crate::traits::UserStore;

/// Collection holding user documents.
pub const USER_COLLECTION: &str = "users";

/// BSON shape of a stored user.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
}

/// Document adapter over one MongoDB database.
pub struct DocumentUserStore {
    database: Database,
    collection: Collection<UserDocument>,
}

impl DocumentUserStore {
    /// Build the client and verify the server is reachable. The MongoDB
    /// driver connects lazily, so an explicit ping is needed to turn an
    /// unreachable backend into a fatal startup error.
    pub async fn connect(settings: &DocumentSettings) -> anyhow::Result<Self> {
        let options = ClientOptions::parse(settings.connect_url()).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&settings.database);
        let collection = database.collection::<UserDocument>(USER_COLLECTION);

        let store = Self {
            database,
            collection,
        };
        store.health_check().await?;
        Ok(store)
    }
}

#[async_trait]
impl UserStore for DocumentUserStore {
    fn kind(&self) -> StoreKind {
        StoreKind::Document
    }

    async fn save(&self, name: &str) -> anyhow::Result<UserRecord> {
        let document = UserDocument {
            id: None,
            name: name.to_string(),
        };
        let result = self.collection.insert_one(&document).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| anyhow::anyhow!("document store assigned a non-ObjectId id"))?;

        Ok(UserRecord::document(id.to_hex(), document.name))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<UserRecord>> {
        let documents: Vec<UserDocument> =
            self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(documents
            .into_iter()
            .map(|d| {
                let id = d.id.map(|oid| oid.to_hex()).unwrap_or_default();
                UserRecord::document(id, d.name)
            })
            .collect())
    }

    async fn health_check(&self) -> anyhow::Result<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_document_serializes_without_id() {
        let document = UserDocument {
            id: None,
            name: "Alice".to_string(),
        };
        let bson = mongodb::bson::to_document(&document).unwrap();
        assert!(!bson.contains_key("_id"));
        assert_eq!(bson.get_str("name").unwrap(), "Alice");
    }

    #[test]
    fn test_saved_document_roundtrips_object_id() {
        let oid = ObjectId::new();
        let document = UserDocument {
            id: Some(oid),
            name: "Bob".to_string(),
        };
        let bson = mongodb::bson::to_document(&document).unwrap();
        let back: UserDocument = mongodb::bson::from_document(bson).unwrap();
        assert_eq!(back.id, Some(oid));
        assert_eq!(back.name, "Bob");
    }
}
