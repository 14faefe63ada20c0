use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("failed to encode artwork record: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("store is closed")]
    Closed,
}
