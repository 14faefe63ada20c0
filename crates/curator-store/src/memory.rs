use crate::error::StoreError;
use crate::store::{ArtworkStore, InsertOutcome};
use async_trait::async_trait;
use curator_model::ArtworkRecord;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// In-process store, used in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<BTreeMap<i64, ArtworkRecord>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `records` already stored.
    pub fn with_records(records: impl IntoIterator<Item = ArtworkRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.athena_id, r)).collect();
        Self {
            records: Mutex::new(map),
            closed: AtomicBool::new(false),
        }
    }

    /// Snapshot of stored records, ordered by `athena_id`.
    pub async fn records(&self) -> Vec<ArtworkRecord> {
        self.records.lock().await.values().cloned().collect()
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtworkStore for MemoryStore {
    async fn insert_if_absent(&self, record: &ArtworkRecord) -> Result<InsertOutcome, StoreError> {
        if self.is_closed() {
            return Err(StoreError::Closed);
        }
        let mut records = self.records.lock().await;
        if records.contains_key(&record.athena_id) {
            return Ok(InsertOutcome::Skipped);
        }
        records.insert(record.athena_id, record.clone());
        Ok(InsertOutcome::Inserted)
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}
