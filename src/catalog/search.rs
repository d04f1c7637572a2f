use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

use super::envelope::{resource_list, single_resource};
use crate::{config, error::IngestError, types::Track, utils::decode};

const SEARCH_TYPES: &str = "songs";
const STRIPPED_CHARS: [char; 6] = ['(', ')', '[', ']', '{', '}'];

/// Builds the free-text search term for a track: `"<title> <artist>"` with
/// brackets removed and whitespace collapsed.
pub fn search_query(track: &Track) -> String {
    format!("{} {}", track.title, track.artist)
        .replace(&STRIPPED_CHARS[..], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Client for the second catalog, the one playlists are synced into.
///
/// Responses are read through the envelope normalizer because the catalog
/// has returned several different wrappers for the same endpoints.
pub struct CatalogClient {
    http: Client,
    api_url: String,
    storefront: String,
    developer_token: String,
    user_token: Option<String>,
}

impl CatalogClient {
    pub fn new(
        http: Client,
        api_url: String,
        storefront: String,
        developer_token: String,
        user_token: Option<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            storefront,
            developer_token,
            user_token,
        }
    }

    /// # Errors
    ///
    /// `MissingConfig` when no developer token is configured.
    pub fn from_config(http: Client) -> Result<Self, IngestError> {
        Ok(Self::new(
            http,
            config::catalog_apiurl(),
            config::catalog_storefront(),
            config::catalog_developer_token()?,
            config::catalog_user_token(),
        ))
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self.http.get(url).bearer_auth(&self.developer_token);
        match &self.user_token {
            Some(token) => request.header("Music-User-Token", token),
            None => request,
        }
    }

    async fn get_json(
        &self,
        url: &str,
        query: &[(&str, String)],
        id: &str,
    ) -> Result<Value, IngestError> {
        let response = self
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(IngestError::transport)?;
        decode::<Value>(response, id).await
    }

    /// Searches the catalog for a track and returns the top hit, if any.
    pub async fn search_track(
        &self,
        track: &Track,
        limit: u32,
    ) -> Result<Option<Value>, IngestError> {
        let term = search_query(track);
        let url = format!(
            "{uri}/catalog/{storefront}/search",
            uri = self.api_url,
            storefront = self.storefront
        );

        let body = self
            .get_json(
                &url,
                &[
                    ("term", term.clone()),
                    ("types", SEARCH_TYPES.to_string()),
                    ("limit", limit.to_string()),
                ],
                &term,
            )
            .await?;

        // songs are nested by type; fall back to the whole body for flatter shapes
        let songs = body.pointer("/results/songs").unwrap_or(&body);
        let hit = resource_list(songs).into_iter().next();

        debug!(term = %term, found = hit.is_some(), "catalog search");
        Ok(hit)
    }

    /// Lists the playlists in the user's library.
    pub async fn list_playlists(&self) -> Result<Vec<Value>, IngestError> {
        let url = format!("{uri}/me/library/playlists", uri = self.api_url);
        let body = self.get_json(&url, &[], "library").await?;
        Ok(resource_list(&body))
    }

    /// Fetches one library playlist.
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Option<Value>, IngestError> {
        let url = format!(
            "{uri}/me/library/playlists/{id}",
            uri = self.api_url,
            id = playlist_id
        );
        let body = self.get_json(&url, &[], playlist_id).await?;
        Ok(single_resource(&body))
    }
}

/// Best display name of a catalog resource (`attributes.name`, then `name`).
pub fn resource_name(resource: &Value) -> Option<&str> {
    resource
        .pointer("/attributes/name")
        .or_else(|| resource.get("name"))
        .and_then(Value::as_str)
}

/// Identifier of a catalog resource, from its top-level `id` field.
///
/// # Arguments
///
/// * `resource` - A resource as returned by [`CatalogClient::list_playlists`]
///   or [`CatalogClient::search_track`]
///
/// # Returns
///
/// `None` when the resource has no string `id`.
pub fn resource_id(resource: &Value) -> Option<&str> {
    resource.get("id").and_then(Value::as_str)
}
