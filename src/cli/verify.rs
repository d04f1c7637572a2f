use std::path::PathBuf;

use reqwest::Client;

use super::output::{print_manifest, remote_source, with_deadline};
use crate::{
    catalog::{CatalogClient, estimate_match, resource_name, verify_manifest},
    error, info,
    ingest::ingest,
    types::{PlaylistManifest, TrackStatus},
    utils, warning,
};

const SEARCH_LIMIT: u32 = 5;

pub async fn verify(file: Option<PathBuf>, lookup: bool) {
    let input = match utils::read_input(file.as_deref()).await {
        Ok(input) => input,
        Err(e) => error!("Failed to read input. Err: {}", e),
    };

    let http = Client::new();
    let source = remote_source(http.clone());
    let mut manifest = match with_deadline(ingest(&input, source.as_ref())).await {
        Ok(manifest) => manifest,
        Err(e) => error!("{}", e.user_message()),
    };

    if lookup {
        let client = match CatalogClient::from_config(http) {
            Ok(client) => client,
            Err(e) => error!("{}", e.user_message()),
        };
        lookup_tracks(&client, &mut manifest).await;
    } else {
        let matched = verify_manifest(&mut manifest);
        info!(
            "{} of {} tracks likely available (heuristic estimate, not a catalog lookup)",
            matched,
            manifest.tracks.len()
        );
    }

    if let Err(e) = print_manifest(&manifest, false) {
        error!("Failed to print playlist. Err: {}", e);
    }
}

/// Searches the catalog for each track in order; one request at a time.
async fn lookup_tracks(client: &CatalogClient, manifest: &mut PlaylistManifest) {
    let pb = utils::spinner("Searching catalog...");
    let total = manifest.tracks.len();

    for (index, track) in manifest.tracks.iter_mut().enumerate() {
        pb.set_message(format!("Searching catalog... {}/{}", index + 1, total));
        track.status = TrackStatus::Matching;
        track.confidence = Some(estimate_match(track).confidence);

        match with_deadline(client.search_track(track, SEARCH_LIMIT)).await {
            Ok(Some(hit)) => {
                tracing::debug!(track = %track.title, hit = ?resource_name(&hit), "catalog match");
                track.status = TrackStatus::Matched;
            }
            Ok(None) => track.status = TrackStatus::Failed,
            Err(e) => {
                track.status = TrackStatus::Failed;
                pb.suspend(|| warning!("Lookup failed for \"{}\": {}", track.title, e));
            }
        }
    }

    pb.finish_and_clear();
}
