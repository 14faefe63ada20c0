pub mod error;
pub mod memory;
pub mod mongo;
pub mod persist;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use persist::{persist_artworks, persist_batch, PersistReport};
pub use store::{ArtworkStore, InsertOutcome};
