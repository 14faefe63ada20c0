pub mod cleveland;
pub mod error;

pub use cleveland::{MuseumClient, RELATED_LIMIT};
pub use error::AcquireError;
