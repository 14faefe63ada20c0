use crate::de::null_as_default;
use serde::{Deserialize, Serialize};

/// An exhibition as returned by the open-access `/exhibitions/` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exhibition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub organizer: Option<String>,
    /// Raw opening date string, e.g. "2017-09-10T04:00:00".
    #[serde(default)]
    pub opening_date: Option<String>,
    #[serde(default)]
    pub closing_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artworks: Vec<ArtworkRef>,
}

/// A reference from an exhibition to one of its artworks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtworkRef {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub accession_number: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Exhibition {
    pub fn artwork_count(&self) -> usize {
        self.artworks.len()
    }

    /// Human-readable summary, one `Label: value` line per field.
    ///
    /// Dates are printed as the API sent them.
    pub fn summary(&self) -> String {
        format!(
            "Exhibition Title: {}\n\
             Organizer: {}\n\
             Opening Date: {}\n\
             Closing Date: {}\n\
             Number of Artworks In Exhibition: {}",
            self.title,
            self.organizer.as_deref().unwrap_or("None"),
            self.opening_date.as_deref().unwrap_or("None"),
            self.closing_date.as_deref().unwrap_or("None"),
            self.artwork_count(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_exhibition() -> Exhibition {
        serde_json::from_str(
            r#"{
                "id": 208012,
                "title": "Art of the Islamic World",
                "organizer": "The Cleveland Museum of Art",
                "opening_date": "2017-09-10T04:00:00",
                "closing_date": null,
                "artworks": [
                    { "id": 1, "accession_number": "1964.276", "title": "Bowl" },
                    { "id": 2, "accession_number": "1939.49" }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_deserialize_exhibition() {
        let ex = sample_exhibition();
        assert_eq!(ex.title, "Art of the Islamic World");
        assert_eq!(ex.artwork_count(), 2);
        assert_eq!(ex.opening_date.as_deref(), Some("2017-09-10T04:00:00"));
        assert!(ex.closing_date.is_none());
    }

    #[test]
    fn test_summary_lines() {
        let summary = sample_exhibition().summary();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[0], "Exhibition Title: Art of the Islamic World");
        assert_eq!(lines[1], "Organizer: The Cleveland Museum of Art");
        assert_eq!(lines[2], "Opening Date: 2017-09-10T04:00:00");
        assert_eq!(lines[3], "Closing Date: None");
        assert_eq!(lines[4], "Number of Artworks In Exhibition: 2");
    }

    #[test]
    fn test_null_title_and_artworks() {
        let ex: Exhibition = serde_json::from_str(r#"{"title": null, "artworks": null}"#).unwrap();
        assert_eq!(ex.title, "");
        assert_eq!(ex.artwork_count(), 0);

        let ex: Exhibition = serde_json::from_str("{}").unwrap();
        assert!(ex.artworks.is_empty());
    }
}
