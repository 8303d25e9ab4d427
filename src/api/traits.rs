use crate::models::{Property, PropertyDraft, PropertyId};
use anyhow::Result;
use async_trait::async_trait;

/// Transport seam for the properties resource.
/// The synchronizer only talks to this trait, so tests can swap in
/// an in-memory fake for the REST client.
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// Fetch the full collection, in server order.
    async fn list(&self) -> Result<Vec<Property>>;

    /// Fetch a single record by identifier.
    async fn get(&self, id: PropertyId) -> Result<Property>;

    /// Create a new record. The server assigns the identifier.
    async fn create(&self, draft: &PropertyDraft) -> Result<()>;

    /// Replace the record at `id`. The request body carries the same id.
    async fn update(&self, id: PropertyId, draft: &PropertyDraft) -> Result<()>;

    /// Delete the record at `id`.
    async fn delete(&self, id: PropertyId) -> Result<()>;
}
