//! MongoDB-backed document store

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::{Client, Database};

use super::{DocumentStore, StoreError, StoreResult};
use crate::config::AppConfig;

/// Document store over a MongoDB database.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Builds a client from the configured connection string.
    ///
    /// The driver connects lazily, so this only fails on a malformed
    /// URL; an unreachable server surfaces on the first operation.
    pub async fn connect(config: &AppConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.database_url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        tracing::info!(database = %config.database_name, "document store client initialized");
        Ok(Self {
            database: client.database(&config.database_name),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create(&self, collection: &str, document: Document) -> StoreResult<String> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn list(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(filter)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.database.list_collection_names().await?)
    }

    fn database_name(&self) -> &str {
        self.database.name()
    }
}
