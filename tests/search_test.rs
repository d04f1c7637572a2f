use reqwest::Client;
use serde_json::json;
use tracklift::catalog::{CatalogClient, resource_id, resource_name};
use tracklift::error::IngestError;
use tracklift::types::Track;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, user_token: Option<&str>) -> CatalogClient {
    CatalogClient::new(
        Client::new(),
        format!("{}/v1/", server.uri()),
        "us".to_string(),
        "dev-token".to_string(),
        user_token.map(String::from),
    )
}

fn track(title: &str, artist: &str) -> Track {
    Track::new(0, title.to_string(), artist.to_string(), String::new())
}

#[tokio::test]
async fn test_search_track_returns_top_hit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalog/us/search"))
        .and(query_param("term", "Die For You Remix The Weeknd"))
        .and(query_param("types", "songs"))
        .and(query_param("limit", "5"))
        .and(header("authorization", "Bearer dev-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": {
                "songs": {
                    "data": [
                        {"id": "111", "attributes": {"name": "Die For You (Remix)"}},
                        {"id": "222", "attributes": {"name": "Die For You"}}
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let hit = client(&server, None)
        .search_track(&track("Die For You (Remix)", "The Weeknd"), 5)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(resource_id(&hit), Some("111"));
    assert_eq!(resource_name(&hit), Some("Die For You (Remix)"));
}

#[tokio::test]
async fn test_search_track_without_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/catalog/us/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": {}})))
        .mount(&server)
        .await;

    let hit = client(&server, None)
        .search_track(&track("Nonexistent", "Nobody"), 5)
        .await
        .unwrap();
    assert!(hit.is_none());
}

#[tokio::test]
async fn test_list_playlists_in_either_shape() {
    let bodies = [
        json!({"data": [{"id": "p.1", "attributes": {"name": "Gym"}}]}),
        json!({"items": [{"id": "p.1", "name": "Gym"}]}),
    ];

    for body in bodies {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/me/library/playlists"))
            .and(header("music-user-token", "user-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        let playlists = client(&server, Some("user-token"))
            .list_playlists()
            .await
            .unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(resource_id(&playlists[0]), Some("p.1"));
        assert_eq!(resource_name(&playlists[0]), Some("Gym"));
    }
}

#[tokio::test]
async fn test_get_playlist_single_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me/library/playlists/p.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{"id": "p.1", "attributes": {"name": "Gym"}}]
        })))
        .mount(&server)
        .await;

    let playlist = client(&server, Some("user-token"))
        .get_playlist("p.1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(resource_name(&playlist), Some("Gym"));
}

#[tokio::test]
async fn test_catalog_errors_are_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/me/library/playlists/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/me/library/playlists"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let catalog = client(&server, None);

    assert_eq!(
        catalog.get_playlist("missing").await.unwrap_err(),
        IngestError::RemoteNotFound {
            id: "missing".to_string()
        }
    );
    assert_eq!(
        catalog.list_playlists().await.unwrap_err(),
        IngestError::RemoteAccessDenied {
            id: "library".to_string(),
            status: 401
        }
    );
}
