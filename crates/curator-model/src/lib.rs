pub mod artwork;
pub mod config;
pub mod de;
pub mod exhibition;

pub use artwork::*;
pub use config::{Config, ConfigError};
pub use exhibition::*;
