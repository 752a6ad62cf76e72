// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::article::ImageName;
use async_trait::async_trait;
use bytes::Bytes;

/// Named binary objects holding uploaded article images.
///
/// The store is independent of the relational database: nothing here takes
/// part in a transaction, so callers compensate by hand when a later write fails.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `bytes` under `name`, replacing any existing object.
    async fn put(&self, name: &ImageName, bytes: Bytes) -> ApplicationResult<()>;

    /// Remove the object. Returns `false` if there was nothing to remove.
    async fn delete(&self, name: &ImageName) -> ApplicationResult<bool>;

    async fn get(&self, name: &ImageName) -> ApplicationResult<Option<Bytes>>;
}
