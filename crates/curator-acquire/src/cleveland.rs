use crate::error::AcquireError;
use curator_model::de::null_as_default;
use curator_model::{earliest_n, oldest, Artwork, DateWindow, Exhibition};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// How many related artworks make up the mini exhibition.
pub const RELATED_LIMIT: usize = 5;

/// Envelope every open-access endpoint wraps its results in.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    data: Vec<T>,
}

#[derive(Debug, Serialize)]
struct ExhibitionQuery<'a> {
    title: &'a str,
    limit: u32,
}

#[derive(Debug, Serialize)]
struct ArtworkQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    exhibition_history: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    artwork_type: Option<&'a str>,
    created_after: i32,
    created_before: i32,
}

/// Client for the Cleveland Museum of Art open-access API.
///
/// Each `find_*` method logs failures and returns not-found; the matching
/// `try_find_*` method surfaces the error instead.
#[derive(Debug, Clone)]
pub struct MuseumClient {
    http: reqwest::Client,
    base_url: String,
}

impl MuseumClient {
    pub fn new(base_url: &str) -> Result<Self, AcquireError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("curator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_data<T, Q>(&self, endpoint: &str, query: &Q) -> Result<Vec<T>, AcquireError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{endpoint}/", self.base_url);
        tracing::debug!(url = %url, "GET");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AcquireError::Status { status, url });
        }

        let body: ApiResponse<T> = response.json().await?;
        tracing::debug!(url = %url, results = body.data.len(), "Received response");
        Ok(body.data)
    }

    /// First exhibition whose title matches `title`.
    pub async fn try_find_exhibition(&self, title: &str) -> Result<Option<Exhibition>, AcquireError> {
        let query = ExhibitionQuery { title, limit: 1 };
        let exhibitions: Vec<Exhibition> = self.fetch_data("exhibitions", &query).await?;
        Ok(exhibitions.into_iter().next())
    }

    pub async fn find_exhibition(&self, title: &str) -> Option<Exhibition> {
        match self.try_find_exhibition(title).await {
            Ok(Some(exhibition)) => {
                tracing::info!(title = %exhibition.title, artworks = exhibition.artwork_count(), "Found exhibition");
                Some(exhibition)
            }
            Ok(None) => {
                tracing::warn!(title = %title, "No exhibition found");
                None
            }
            Err(e) => {
                tracing::error!(title = %title, "Error occurred during API call: {e}");
                None
            }
        }
    }

    /// Oldest artwork shown in `exhibition_title` and created within `window`.
    pub async fn try_find_oldest_artwork(
        &self,
        exhibition_title: &str,
        window: DateWindow,
    ) -> Result<Option<Artwork>, AcquireError> {
        let query = ArtworkQuery {
            exhibition_history: Some(exhibition_title),
            artwork_type: None,
            created_after: window.start,
            created_before: window.end,
        };
        let artworks: Vec<Artwork> = self.fetch_data("artworks", &query).await?;
        tracing::debug!(candidates = artworks.len(), "Artworks in exhibition history");
        Ok(oldest(artworks))
    }

    /// [`try_find_oldest_artwork`](Self::try_find_oldest_artwork) over the Abbasid period.
    pub async fn find_oldest_artwork(&self, exhibition_title: &str) -> Option<Artwork> {
        match self.try_find_oldest_artwork(exhibition_title, DateWindow::ABBASID).await {
            Ok(Some(artwork)) => {
                tracing::info!(
                    athena_id = artwork.athena_id,
                    name = %artwork.display_name(),
                    earliest = ?artwork.creation_date_earliest,
                    "Found oldest artwork"
                );
                Some(artwork)
            }
            Ok(None) => {
                tracing::warn!(exhibition = %exhibition_title, "No artworks found for the exhibition in the date range");
                None
            }
            Err(e) => {
                tracing::error!(exhibition = %exhibition_title, "Error occurred during API call: {e}");
                None
            }
        }
    }

    /// Up to [`RELATED_LIMIT`] oldest artworks sharing `reference`'s type and
    /// created within its creation window (both known dates inside it).
    ///
    /// Returns `Ok(Vec::new())` without querying when the reference has no
    /// type or an incomplete creation window.
    pub async fn try_find_related_artworks(&self, reference: &Artwork) -> Result<Vec<Artwork>, AcquireError> {
        let (Some(artwork_type), Some(window)) = (reference.artwork_type.as_deref(), reference.creation_window())
        else {
            tracing::warn!(athena_id = reference.athena_id, "Reference artwork has no type or creation window");
            return Ok(Vec::new());
        };

        let query = ArtworkQuery {
            exhibition_history: None,
            artwork_type: Some(artwork_type),
            created_after: window.start,
            created_before: window.end,
        };
        let mut artworks: Vec<Artwork> = self.fetch_data("artworks", &query).await?;

        let fetched = artworks.len();
        artworks.retain(|a| is_related(a, artwork_type, window));
        if artworks.len() < fetched {
            tracing::debug!(dropped = fetched - artworks.len(), "Dropped artworks outside type or window");
        }

        Ok(earliest_n(artworks, RELATED_LIMIT))
    }

    pub async fn find_related_artworks(&self, reference: &Artwork) -> Vec<Artwork> {
        match self.try_find_related_artworks(reference).await {
            Ok(artworks) if artworks.is_empty() => {
                tracing::warn!(athena_id = reference.athena_id, "No related artworks found");
                artworks
            }
            Ok(artworks) => {
                tracing::info!(count = artworks.len(), artwork_type = ?reference.artwork_type, "Found related artworks");
                artworks
            }
            Err(e) => {
                tracing::error!(athena_id = reference.athena_id, "Error occurred during API call: {e}");
                Vec::new()
            }
        }
    }
}

fn is_related(artwork: &Artwork, artwork_type: &str, window: DateWindow) -> bool {
    let same_type = artwork
        .artwork_type
        .as_deref()
        .is_some_and(|t| t.eq_ignore_ascii_case(artwork_type));
    let starts_inside = artwork.creation_date_earliest.is_some_and(|y| window.contains(y));
    let ends_inside = artwork.creation_date_latest.map_or(true, |y| window.contains(y));
    same_type && starts_inside && ends_inside
}
