use curator_acquire::MuseumClient;
use curator_store::{persist_batch, ArtworkStore, PersistReport, StoreError};
use std::future::Future;

pub const DEFAULT_EXHIBITION: &str = "Art of the Islamic World";

/// Where a run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    NoExhibition,
    NoOldestArtwork,
    NoRelatedArtworks,
    Persisted(PersistReport),
    PersistFailed,
}

/// Find the exhibition, its oldest Abbasid-period artwork, and the artworks
/// related to it, then persist those into the store `open_store` yields.
///
/// Each stage runs only if the previous one found something. The store is
/// opened only when there is something to write, and is closed afterwards.
pub async fn run<S, F, Fut>(client: &MuseumClient, exhibition_title: &str, open_store: F) -> RunOutcome
where
    S: ArtworkStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<S, StoreError>>,
{
    let Some(exhibition) = client.find_exhibition(exhibition_title).await else {
        println!("No exhibition found for this collection.");
        return RunOutcome::NoExhibition;
    };
    println!("{}", exhibition.summary());

    let Some(oldest) = client.find_oldest_artwork(&exhibition.title).await else {
        println!("No oldest Abbasid artwork found.");
        return RunOutcome::NoOldestArtwork;
    };

    let related = client.find_related_artworks(&oldest).await;
    if related.is_empty() {
        return RunOutcome::NoRelatedArtworks;
    }

    let store = match open_store().await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Error occurred while inserting artwork: {e}");
            return RunOutcome::PersistFailed;
        }
    };

    match persist_batch(&store, &related).await {
        Ok(report) => RunOutcome::Persisted(report),
        Err(e) => {
            tracing::error!("Error occurred while inserting artwork: {e}");
            RunOutcome::PersistFailed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curator_store::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn artwork_json(athena_id: i64, earliest: i32, latest: i32) -> serde_json::Value {
        json!({
            "athena_id": athena_id,
            "accession_number": format!("1964.{athena_id}"),
            "tombstone": format!("Bowl {athena_id}"),
            "type": "Ceramic",
            "creation_date_earliest": earliest,
            "creation_date_latest": latest,
            "images": { "web": { "url": format!("https://example.org/{athena_id}.jpg") } }
        })
    }

    async fn store_must_not_open() -> Result<MemoryStore, StoreError> {
        panic!("store must not be opened")
    }

    async fn mount_exhibition(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/exhibitions/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "title": DEFAULT_EXHIBITION,
                    "organizer": "The Cleveland Museum of Art",
                    "opening_date": "2017-09-10T04:00:00",
                    "closing_date": null,
                    "artworks": [{ "id": 1 }]
                }]
            })))
            .mount(server)
            .await;
    }

    async fn mount_artworks(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/artworks/"))
            .and(query_param("exhibition_history", DEFAULT_EXHIBITION))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [artwork_json(2, 900, 950), artwork_json(1, 800, 899)]
            })))
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/artworks/"))
            .and(query_param("type", "Ceramic"))
            .and(query_param("created_after", "800"))
            .and(query_param("created_before", "899"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [artwork_json(42, 850, 860), artwork_json(1, 800, 899), artwork_json(43, 820, 830)]
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_full_run_persists_related_artworks() {
        let server = MockServer::start().await;
        mount_exhibition(&server).await;
        mount_artworks(&server).await;

        let client = MuseumClient::new(&server.uri()).unwrap();
        let store = Arc::new(MemoryStore::new());
        let handle = store.clone();

        let outcome = run(&client, DEFAULT_EXHIBITION, move || async move { Ok(handle) }).await;
        assert_eq!(outcome, RunOutcome::Persisted(PersistReport { inserted: 3, skipped: 0 }));

        let ids: Vec<i64> = store.records().await.iter().map(|r| r.athena_id).collect();
        assert_eq!(ids, vec![1, 42, 43]);
        assert!(store.is_closed());
    }

    #[tokio::test]
    async fn test_rerun_skips_existing() {
        let server = MockServer::start().await;
        mount_exhibition(&server).await;
        mount_artworks(&server).await;

        let client = MuseumClient::new(&server.uri()).unwrap();
        let existing = curator_model::ArtworkRecord::from(
            &serde_json::from_value::<curator_model::Artwork>(artwork_json(42, 850, 860)).unwrap(),
        );
        let store = Arc::new(MemoryStore::with_records([existing]));
        let handle = store.clone();

        let outcome = run(&client, DEFAULT_EXHIBITION, move || async move { Ok(handle) }).await;
        assert_eq!(outcome, RunOutcome::Persisted(PersistReport { inserted: 2, skipped: 1 }));
        assert_eq!(store.records().await.len(), 3);
    }

    #[tokio::test]
    async fn test_missing_exhibition_stops_pipeline() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/exhibitions/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/artworks/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(0)
            .mount(&server)
            .await;

        let client = MuseumClient::new(&server.uri()).unwrap();
        let outcome = run(&client, DEFAULT_EXHIBITION, store_must_not_open).await;
        assert_eq!(outcome, RunOutcome::NoExhibition);
    }

    #[tokio::test]
    async fn test_api_failure_on_artworks_stops_pipeline() {
        let server = MockServer::start().await;
        mount_exhibition(&server).await;
        Mock::given(method("GET"))
            .and(path("/artworks/"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = MuseumClient::new(&server.uri()).unwrap();
        let outcome = run(&client, DEFAULT_EXHIBITION, || async { Ok(MemoryStore::new()) }).await;
        assert_eq!(outcome, RunOutcome::NoOldestArtwork);
    }

    #[tokio::test]
    async fn test_store_connect_failure_is_reported() {
        let server = MockServer::start().await;
        mount_exhibition(&server).await;
        mount_artworks(&server).await;

        let client = MuseumClient::new(&server.uri()).unwrap();
        let outcome = run(&client, DEFAULT_EXHIBITION, || async {
            Err::<MemoryStore, StoreError>(StoreError::Closed)
        })
        .await;
        assert_eq!(outcome, RunOutcome::PersistFailed);
    }
}
