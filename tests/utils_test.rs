use std::path::Path;

use tracklift::error::{IMAGE_UNSUPPORTED_MESSAGE, IngestError, TrackSource};
use tracklift::ingest::IngestInput;
use tracklift::types::{Track, TrackStatus, TrackTableRow};
use tracklift::utils::*;

// Helper function to write a temporary input file
fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("tracklift-{}-{}", std::process::id(), name));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_is_image_path() {
    assert!(is_image_path(Path::new("screenshot.png")));
    assert!(is_image_path(Path::new("/tmp/Playlist.JPG")));
    assert!(is_image_path(Path::new("photo.heic")));

    assert!(!is_image_path(Path::new("tracks.txt")));
    assert!(!is_image_path(Path::new("playlist")));
    assert!(!is_image_path(Path::new("png")));
}

#[tokio::test]
async fn test_read_input_from_text_file() {
    let path = write_temp("tracks.txt", "Hey Jude - The Beatles\n");

    let input = read_input(Some(&path)).await.unwrap();
    assert_eq!(input, IngestInput::Text("Hey Jude - The Beatles\n".to_string()));

    std::fs::remove_file(&path).ok();
}

#[tokio::test]
async fn test_read_input_image_is_not_read() {
    // the file does not need to exist, images are rejected by name
    let input = read_input(Some(Path::new("/nonexistent/shot.png")))
        .await
        .unwrap();
    assert_eq!(
        input,
        IngestInput::Image {
            file_name: "/nonexistent/shot.png".to_string()
        }
    );
}

#[tokio::test]
async fn test_read_input_missing_file() {
    let err = read_input(Some(Path::new("/nonexistent/tracks.txt")))
        .await
        .unwrap_err();
    assert!(err.contains("/nonexistent/tracks.txt"));
}

#[test]
fn test_from_status_mapping() {
    assert_eq!(
        IngestError::from_status("abc", 404),
        IngestError::RemoteNotFound {
            id: "abc".to_string()
        }
    );
    assert_eq!(
        IngestError::from_status("abc", 403),
        IngestError::RemoteAccessDenied {
            id: "abc".to_string(),
            status: 403
        }
    );
    assert!(matches!(
        IngestError::from_status("abc", 429),
        IngestError::RemoteTransportFailure { .. }
    ));
}

#[test]
fn test_user_messages() {
    let image = IngestError::UnsupportedInputKind {
        kind: "image".to_string(),
    };
    assert_eq!(image.user_message(), IMAGE_UNSUPPORTED_MESSAGE);

    let message = IngestError::NoTracksFound {
        source_kind: TrackSource::Text,
    }
    .user_message();
    assert!(message.contains("pasted text"));
    assert!(message.contains("Suggestion"));

    let message = IngestError::MissingConfig {
        key: "CATALOG_DEVELOPER_TOKEN".to_string(),
    }
    .user_message();
    assert!(message.starts_with("CATALOG_DEVELOPER_TOKEN is not set"));

    assert_eq!(IngestError::EmptyInput.to_string(), "input is empty");
}

#[test]
fn test_track_table_row() {
    let mut track = Track::new(
        2,
        "Yellow".to_string(),
        "Coldplay".to_string(),
        "Parachutes".to_string(),
    );

    let row = TrackTableRow::from(&track);
    assert_eq!(row.position, 3);
    assert_eq!(row.status, "pending");
    assert_eq!(row.confidence, "");

    track.status = TrackStatus::Matched;
    track.confidence = Some(0.9);
    let row = TrackTableRow::from(&track);
    assert_eq!(row.status, "matched");
    assert_eq!(row.confidence, "0.90");
}

#[test]
fn test_track_serializes_status_lowercase() {
    let track = Track::new(0, "Halo".to_string(), "Beyoncé".to_string(), String::new());
    let value = serde_json::to_value(&track).unwrap();

    assert_eq!(value["status"], "pending");
    assert!(value.get("confidence").is_none());
}
