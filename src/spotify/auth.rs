use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{
    config, error::IngestError, management::CredentialProvider, types::AccessToken,
};

/// Obtains app-level Spotify tokens with the client-credentials grant.
///
/// Client-credentials tokens can read public playlists, which is all the
/// importer needs. No user authorization or refresh token is involved.
pub struct ClientCredentialsProvider {
    http: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl ClientCredentialsProvider {
    pub fn new(http: Client, token_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            http,
            token_url,
            client_id,
            client_secret,
        }
    }

    /// Builds a provider from the loaded configuration.
    ///
    /// # Errors
    ///
    /// `MissingConfig` when the client id or secret is not set.
    pub fn from_config(http: Client) -> Result<Self, IngestError> {
        Ok(Self::new(
            http,
            config::spotify_apitoken_url(),
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
        ))
    }
}

#[async_trait]
impl CredentialProvider for ClientCredentialsProvider {
    fn key(&self) -> &str {
        &self.client_id
    }

    async fn fetch_token(&self) -> Result<AccessToken, IngestError> {
        debug!(url = %self.token_url, "requesting client-credentials token");

        let response = self
            .http
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| IngestError::CredentialUnavailable {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestError::CredentialUnavailable {
                reason: format!("token endpoint answered HTTP {}", status.as_u16()),
            });
        }

        let token = response
            .json::<AccessToken>()
            .await
            .map_err(|e| IngestError::CredentialUnavailable {
                reason: format!("malformed token response: {e}"),
            })?;

        if token.access_token.is_empty() {
            return Err(IngestError::CredentialUnavailable {
                reason: "token endpoint returned an empty access token".to_string(),
            });
        }

        Ok(token)
    }
}
