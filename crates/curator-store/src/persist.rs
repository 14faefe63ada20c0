use crate::error::StoreError;
use crate::store::{ArtworkStore, InsertOutcome};
use curator_model::{Artwork, ArtworkRecord};

/// Counts from one persist batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistReport {
    pub inserted: usize,
    pub skipped: usize,
}

/// Write each artwork as a mini-exhibition record, skipping ids already stored.
///
/// The first store error aborts the rest of the batch. Records written before
/// the error stay written; rerunning is safe because each write is keyed.
pub async fn persist_artworks<S>(store: &S, artworks: &[Artwork]) -> Result<PersistReport, StoreError>
where
    S: ArtworkStore + ?Sized,
{
    let mut report = PersistReport::default();

    for artwork in artworks {
        let record = ArtworkRecord::from(artwork);
        match store.insert_if_absent(&record).await? {
            InsertOutcome::Inserted => {
                report.inserted += 1;
                tracing::info!(
                    athena_id = record.athena_id,
                    id = %record.mini_exhibition_identifier,
                    "Inserted artwork"
                );
            }
            InsertOutcome::Skipped => {
                report.skipped += 1;
                tracing::info!(
                    athena_id = record.athena_id,
                    "Artwork with athena_id {} already exists. Skipping insertion.",
                    record.athena_id
                );
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        "All new exhibition artworks inserted successfully"
    );
    Ok(report)
}

/// [`persist_artworks`], then close the store whether or not the batch succeeded.
pub async fn persist_batch<S>(store: &S, artworks: &[Artwork]) -> Result<PersistReport, StoreError>
where
    S: ArtworkStore + ?Sized,
{
    let result = persist_artworks(store, artworks).await;
    store.close().await;
    result
}
