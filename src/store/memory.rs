//! In-process document store
//!
//! Backs the integration tests and lets the server run without a
//! database. Documents live in a map keyed by collection name; ids are
//! UUID strings assigned on insert.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use uuid::Uuid;

use super::{DocumentStore, StoreError, StoreResult};

/// In-memory document store.
pub struct MemoryStore {
    database_name: String,
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            database_name: "memory".to_string(),
            collections: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, mut document: Document) -> StoreResult<String> {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(oid)) => oid.to_hex(),
            Some(Bson::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => {
                let id = Uuid::new_v4().to_string();
                document.insert("_id", id.clone());
                id
            }
        };
        let mut collections = self.collections.write().map_err(|_| poisoned())?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn list(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        let documents = collections.get(collection).cloned().unwrap_or_default();
        Ok(documents
            .into_iter()
            .filter(|document| matches_filter(document, &filter))
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn collection_names(&self) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().map_err(|_| poisoned())?;
        Ok(collections.keys().cloned().collect())
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }
}

// Exact-match filtering only; enough for the empty and equality filters
// this service issues.
fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

fn poisoned() -> StoreError {
    StoreError::Operation("collection map lock poisoned".to_string())
}
