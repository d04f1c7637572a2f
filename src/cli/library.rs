use reqwest::Client;
use tabled::Table;

use super::output::with_deadline;
use crate::{
    catalog::{CatalogClient, resource_id, resource_name},
    error, info,
    types::CatalogPlaylistRow,
    utils,
};

pub async fn library() {
    let client = match CatalogClient::from_config(Client::new()) {
        Ok(client) => client,
        Err(e) => error!("{}", e.user_message()),
    };

    let pb = utils::spinner("Fetching library playlists...");
    let result = with_deadline(client.list_playlists()).await;
    pb.finish_and_clear();

    let playlists = match result {
        Ok(playlists) => playlists,
        Err(e) => error!("{}", e.user_message()),
    };

    if playlists.is_empty() {
        info!("No playlists found in the library.");
        return;
    }

    let rows: Vec<CatalogPlaylistRow> = playlists
        .iter()
        .map(|p| CatalogPlaylistRow {
            id: resource_id(p).unwrap_or_default().to_string(),
            name: resource_name(p).unwrap_or("(untitled)").to_string(),
        })
        .collect();

    println!("{}", Table::new(rows));
}
