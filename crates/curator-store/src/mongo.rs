use crate::error::StoreError;
use crate::store::{ArtworkStore, InsertOutcome};
use async_trait::async_trait;
use curator_model::{ArtworkRecord, Config};
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

/// MongoDB-backed store. Insert-if-absent is a single `$setOnInsert` upsert
/// against a unique index on `athena_id`, so concurrent runs cannot
/// duplicate a record and existing documents are never changed.
#[derive(Debug, Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoStore {
    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(config.mongodb_uri()).await?;
        let collection = client
            .database(&config.database_name)
            .collection::<Document>(&config.collection_name);

        let store = Self { client, collection };
        // An existing collection with duplicate athena_ids rejects the index;
        // the upsert filter still keeps new writes unique.
        if let Err(e) = store.ensure_unique_index().await {
            tracing::warn!("Could not create unique index on athena_id: {e}");
        }

        tracing::info!(
            database = %config.database_name,
            collection = %config.collection_name,
            "Connected to MongoDB"
        );
        Ok(store)
    }

    async fn ensure_unique_index(&self) -> Result<(), StoreError> {
        let index = IndexModel::builder()
            .keys(doc! { "athena_id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.collection.create_index(index).await?;
        Ok(())
    }
}

#[async_trait]
impl ArtworkStore for MongoStore {
    async fn insert_if_absent(&self, record: &ArtworkRecord) -> Result<InsertOutcome, StoreError> {
        let document = mongodb::bson::to_document(record)?;
        let result = self
            .collection
            .update_one(
                doc! { "athena_id": record.athena_id },
                doc! { "$setOnInsert": document },
            )
            .upsert(true)
            .await?;

        Ok(if result.upserted_id.is_some() {
            InsertOutcome::Inserted
        } else {
            InsertOutcome::Skipped
        })
    }

    async fn close(&self) {
        self.client.clone().shutdown().await;
        tracing::debug!("MongoDB client shut down");
    }
}
