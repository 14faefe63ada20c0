use serde::{Deserialize, Serialize};

/// An artwork as returned by the open-access `/artworks/` endpoint.
///
/// Only the fields the mini exhibition needs are decoded; everything else in
/// the API payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Artwork {
    /// Stable identifier in the museum's collection system.
    pub athena_id: i64,
    #[serde(default)]
    pub accession_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Curatorial short description (title, maker, date, medium, credit).
    #[serde(default)]
    pub tombstone: Option<String>,
    /// Image renditions (`web`, `print`, `full`), kept as the API sends them.
    #[serde(default)]
    pub images: serde_json::Value,
    /// Object type, e.g. "Ceramic" or "Textile".
    #[serde(rename = "type", default)]
    pub artwork_type: Option<String>,
    /// Earliest plausible creation year; negative for BCE.
    #[serde(default)]
    pub creation_date_earliest: Option<i32>,
    /// Latest plausible creation year; negative for BCE.
    #[serde(default)]
    pub creation_date_latest: Option<i32>,
}

impl Artwork {
    /// The title if the API supplied one, otherwise the accession number.
    pub fn display_name(&self) -> &str {
        self.title
            .as_deref()
            .or(self.accession_number.as_deref())
            .unwrap_or("")
    }

    /// The creation window `[earliest, latest]`, if both ends are known.
    pub fn creation_window(&self) -> Option<DateWindow> {
        match (self.creation_date_earliest, self.creation_date_latest) {
            (Some(start), Some(end)) => Some(DateWindow { start, end }),
            _ => None,
        }
    }
}

/// The document written to the mini-exhibition collection.
///
/// Field order and names match the stored document shape exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworkRecord {
    pub athena_id: i64,
    pub accession_number: Option<String>,
    pub tombstone: Option<String>,
    pub images: serde_json::Value,
    #[serde(rename = "type")]
    pub artwork_type: Option<String>,
    pub creation_date_latest: Option<i32>,
    pub creation_date_earliest: Option<i32>,
    pub mini_exhibition_identifier: String,
}

impl From<&Artwork> for ArtworkRecord {
    fn from(art: &Artwork) -> Self {
        Self {
            athena_id: art.athena_id,
            accession_number: art.accession_number.clone(),
            tombstone: art.tombstone.clone(),
            images: art.images.clone(),
            artwork_type: art.artwork_type.clone(),
            creation_date_latest: art.creation_date_latest,
            creation_date_earliest: art.creation_date_earliest,
            mini_exhibition_identifier: mini_exhibition_identifier(art.athena_id),
        }
    }
}

/// Key tagging an artwork as part of the derived mini exhibition.
pub fn mini_exhibition_identifier(athena_id: i64) -> String {
    format!("mini_{athena_id}")
}

/// An inclusive range of creation years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: i32,
    pub end: i32,
}

impl DateWindow {
    /// The Abbasid caliphate, 750–1258.
    pub const ABBASID: DateWindow = DateWindow { start: 750, end: 1258 };

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Stable ascending sort on `creation_date_earliest`; undated artworks go last.
///
/// Artworks with equal dates keep their relative (API response) order.
pub fn sort_by_earliest(artworks: &mut [Artwork]) {
    artworks.sort_by_key(|a| (a.creation_date_earliest.is_none(), a.creation_date_earliest));
}

/// The artwork with the smallest `creation_date_earliest`.
pub fn oldest(mut artworks: Vec<Artwork>) -> Option<Artwork> {
    sort_by_earliest(&mut artworks);
    artworks.into_iter().next()
}

/// The `n` artworks with the smallest `creation_date_earliest`, oldest first.
pub fn earliest_n(mut artworks: Vec<Artwork>, n: usize) -> Vec<Artwork> {
    sort_by_earliest(&mut artworks);
    artworks.truncate(n);
    artworks
}
