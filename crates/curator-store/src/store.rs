use crate::error::StoreError;
use async_trait::async_trait;
use curator_model::ArtworkRecord;

/// What happened to a record handed to [`ArtworkStore::insert_if_absent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same `athena_id` was already stored; nothing was written.
    Skipped,
}

/// A collection of mini-exhibition records keyed by `athena_id`.
///
/// Implementations never modify a record once stored.
#[async_trait]
pub trait ArtworkStore: Send + Sync {
    /// Store `record` unless one with the same `athena_id` exists.
    async fn insert_if_absent(&self, record: &ArtworkRecord) -> Result<InsertOutcome, StoreError>;

    /// Release the underlying connection. Further calls are not expected.
    async fn close(&self);
}

#[async_trait]
impl<T: ArtworkStore + ?Sized> ArtworkStore for std::sync::Arc<T> {
    async fn insert_if_absent(&self, record: &ArtworkRecord) -> Result<InsertOutcome, StoreError> {
        (**self).insert_if_absent(record).await
    }

    async fn close(&self) {
        (**self).close().await
    }
}
