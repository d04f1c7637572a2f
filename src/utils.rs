use std::{path::Path, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{error::IngestError, ingest::IngestInput};

const IMAGE_EXTENSIONS: [&str; 8] = ["png", "jpg", "jpeg", "gif", "webp", "heic", "bmp", "tiff"];

/// Checks the status of a response and decodes its JSON body.
///
/// Non-success statuses are mapped with [`IngestError::from_status`], using
/// `resource_id` as the context for the error.
pub async fn decode<T: DeserializeOwned>(
    response: Response,
    resource_id: &str,
) -> Result<T, IngestError> {
    let status = response.status();
    if !status.is_success() {
        warn!(
            resource = resource_id,
            status = status.as_u16(),
            "remote request failed"
        );
        return Err(IngestError::from_status(resource_id, status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| IngestError::transport(format!("malformed response: {e}")))
}

pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Reads ingestion input from a file, or from stdin when no path is given.
pub async fn read_input(path: Option<&Path>) -> Result<IngestInput, String> {
    match path {
        Some(p) if is_image_path(p) => Ok(IngestInput::Image {
            file_name: p.display().to_string(),
        }),
        Some(p) => async_fs::read_to_string(p)
            .await
            .map(IngestInput::Text)
            .map_err(|e| format!("cannot read {}: {}", p.display(), e)),
        None => tokio::task::spawn_blocking(|| std::io::read_to_string(std::io::stdin()))
            .await
            .map_err(|e| e.to_string())?
            .map(IngestInput::Text)
            .map_err(|e| format!("cannot read stdin: {}", e)),
    }
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
