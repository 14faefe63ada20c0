use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://openaccess-api.clevelandart.org/api";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing required config option(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Runtime configuration, loaded once at startup and handed to the
/// components that need it.
#[derive(Clone)]
pub struct Config {
    pub mongodb_username: String,
    pub mongodb_password: String,
    /// Full cluster host, e.g. `cluster0.abcd123.mongodb.net`.
    pub mongodb_cluster: String,
    pub database_name: String,
    pub collection_name: String,
    pub api_base_url: String,
}

/// On-disk shape: every option may be absent until validated.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    mongodb_username: Option<String>,
    mongodb_password: Option<String>,
    mongodb_cluster: Option<String>,
    database_name: Option<String>,
    collection_name: Option<String>,
    api_base_url: Option<String>,
}

impl Config {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse and validate config JSON. Empty strings count as missing.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;

        let mut missing = Vec::new();
        let mut require = |value: Option<String>, name: &'static str| -> String {
            match value.filter(|v| !v.trim().is_empty()) {
                Some(v) => v,
                None => {
                    missing.push(name);
                    String::new()
                }
            }
        };

        let config = Config {
            mongodb_username: require(raw.mongodb_username, "mongodb_username"),
            mongodb_password: require(raw.mongodb_password, "mongodb_password"),
            mongodb_cluster: require(raw.mongodb_cluster, "mongodb_cluster"),
            database_name: require(raw.database_name, "database_name"),
            collection_name: require(raw.collection_name, "collection_name"),
            api_base_url: raw
                .api_base_url
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        };

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }
        Ok(config)
    }

    /// SRV connection string for the configured Atlas cluster.
    pub fn mongodb_uri(&self) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/{}?retryWrites=true&w=majority",
            urlencoding::encode(&self.mongodb_username),
            urlencoding::encode(&self.mongodb_password),
            self.mongodb_cluster,
            self.database_name,
        )
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("mongodb_username", &self.mongodb_username)
            .field("mongodb_password", &"<redacted>")
            .field("mongodb_cluster", &self.mongodb_cluster)
            .field("database_name", &self.database_name)
            .field("collection_name", &self.collection_name)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
