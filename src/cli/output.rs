use std::{future::Future, sync::Arc};

use reqwest::Client;
use tabled::Table;

use crate::{
    Res, config,
    error::IngestError,
    ingest::{PlaylistSource, UnavailableSource},
    management::CredentialCache,
    spotify::{ClientCredentialsProvider, SpotifySource},
    success,
    types::{PlaylistManifest, TrackTableRow},
};

/// Builds the remote source from the configuration.
///
/// Without Spotify credentials text parsing still works; only a remote fetch
/// fails, with the missing setting as the reason.
pub fn remote_source(http: Client) -> Box<dyn PlaylistSource> {
    match ClientCredentialsProvider::from_config(http.clone()) {
        Ok(provider) => Box::new(SpotifySource::new(
            http,
            config::spotify_apiurl(),
            config::spotify_market(),
            Arc::new(CredentialCache::new()),
            Arc::new(provider),
        )),
        Err(e) => Box::new(UnavailableSource(e)),
    }
}

/// Runs a remote operation under the configured deadline.
///
/// Dropping the operation on timeout also drops anything it accumulated.
pub async fn with_deadline<T>(
    operation: impl Future<Output = Result<T, IngestError>>,
) -> Result<T, IngestError> {
    let deadline = config::request_timeout();
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(IngestError::transport(format!(
            "no answer within {} seconds",
            deadline.as_secs()
        ))),
    }
}

pub fn print_manifest(manifest: &PlaylistManifest, json: bool) -> Res<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(manifest)?);
        return Ok(());
    }

    let rows: Vec<TrackTableRow> = manifest.tracks.iter().map(TrackTableRow::from).collect();
    println!("{}", Table::new(rows));
    success!("{}: {} tracks", manifest.name, manifest.tracks.len());
    Ok(())
}
