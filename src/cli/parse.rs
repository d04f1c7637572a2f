use std::path::PathBuf;

use reqwest::Client;

use super::output::{print_manifest, remote_source, with_deadline};
use crate::{error, ingest::ingest, utils};

pub async fn parse(file: Option<PathBuf>, json: bool) {
    let input = match utils::read_input(file.as_deref()).await {
        Ok(input) => input,
        Err(e) => error!("Failed to read input. Err: {}", e),
    };

    let source = remote_source(Client::new());
    let manifest = match with_deadline(ingest(&input, source.as_ref())).await {
        Ok(manifest) => manifest,
        Err(e) => error!("{}", e.user_message()),
    };

    if let Err(e) = print_manifest(&manifest, json) {
        error!("Failed to print playlist. Err: {}", e);
    }
}
