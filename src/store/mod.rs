//! Document store adapter
//!
//! Generic create/read persistence scoped by collection name. The trait
//! carries no domain logic; callers enforce invariants such as the
//! single-campaign rule.
//!
//! Two implementations:
//! - `MongoStore`: production backend over the mongodb driver
//! - `MemoryStore`: in-process backend for tests and local runs

pub mod errors;
pub mod memory;
pub mod mongo;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::Document;

/// Collection holding the (single) campaign record
pub const CAMPAIGN_COLLECTION: &str = "campaign";

/// Collection holding contribution records
pub const CONTRIBUTION_COLLECTION: &str = "contribution";

/// Collection-scoped document persistence.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a document and returns its store-assigned id.
    /// No uniqueness or dedup logic; the caller enforces domain rules.
    async fn create(&self, collection: &str, document: Document) -> StoreResult<String>;

    /// Returns all documents matching the filter, loosely typed.
    /// An empty filter returns the whole collection.
    async fn list(&self, collection: &str, filter: Document) -> StoreResult<Vec<Document>>;

    /// Probes store connectivity. Used by diagnostics only.
    async fn ping(&self) -> StoreResult<()>;

    /// Lists collection names. Used by diagnostics only.
    async fn collection_names(&self) -> StoreResult<Vec<String>>;

    /// Name of the backing database.
    fn database_name(&self) -> &str;
}
