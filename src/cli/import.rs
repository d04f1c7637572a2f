use reqwest::Client;

use super::output::{print_manifest, remote_source, with_deadline};
use crate::{
    error,
    ingest::{IngestInput, ingest},
    utils,
};

pub async fn import(reference: String, json: bool) {
    let source = remote_source(Client::new());
    let input = IngestInput::Remote(reference);

    let pb = utils::spinner("Fetching playlist...");
    let result = with_deadline(ingest(&input, source.as_ref())).await;
    pb.finish_and_clear();

    let manifest = match result {
        Ok(manifest) => manifest,
        Err(e) => error!("{}", e.user_message()),
    };

    if let Err(e) = print_manifest(&manifest, json) {
        error!("Failed to print playlist. Err: {}", e);
    }
}
