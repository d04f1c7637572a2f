use serde_json::{Value, json};
use tracklift::catalog::confidence::{MAX_CONFIDENCE, MIN_CONFIDENCE};
use tracklift::catalog::*;
use tracklift::types::{PlaylistManifest, Track, TrackStatus};

fn track(title: &str, artist: &str, album: &str) -> Track {
    Track::new(0, title.to_string(), artist.to_string(), album.to_string())
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}

fn ids(list: &[Value]) -> Vec<&str> {
    list.iter().filter_map(resource_id).collect()
}

#[test]
fn test_resource_list_recognized_shapes() {
    let cases = [
        json!([{"id": "a"}, {"id": "b"}]),
        json!({"data": [{"id": "a"}, {"id": "b"}]}),
        json!({"items": [{"id": "a"}, {"id": "b"}]}),
        json!({"data": {"data": [{"id": "a"}, {"id": "b"}]}}),
        json!({"data": {"items": [{"id": "a"}, {"id": "b"}]}}),
        json!({"results": [{"id": "a"}, {"id": "b"}]}),
    ];

    for case in cases {
        assert_eq!(ids(&resource_list(&case)), vec!["a", "b"], "failed for {}", case);
    }
}

#[test]
fn test_resource_list_shape_priority() {
    // data wins over items and results
    let value = json!({
        "results": [{"id": "r"}],
        "items": [{"id": "i"}],
        "data": [{"id": "d"}]
    });
    assert_eq!(ids(&resource_list(&value)), vec!["d"]);

    // items wins over results
    let value = json!({"results": [{"id": "r"}], "items": [{"id": "i"}]});
    assert_eq!(ids(&resource_list(&value)), vec!["i"]);
}

#[test]
fn test_resource_list_unrecognized_shapes_are_empty() {
    let cases = [
        json!(null),
        json!("text"),
        json!(42),
        json!({"id": "p1", "attributes": {"name": "Mix"}}),
        json!({"data": {"id": "p1"}}),
        json!({"data": []}),
    ];

    for case in cases {
        assert!(resource_list(&case).is_empty(), "failed for {}", case);
    }
}

#[test]
fn test_envelope_classification() {
    assert_eq!(CatalogEnvelope::from_value(&json!(null)), CatalogEnvelope::Empty);
    assert_eq!(
        CatalogEnvelope::from_value(&json!({"items": []})),
        CatalogEnvelope::Single(json!({"items": []}))
    );
    assert_eq!(
        CatalogEnvelope::from_value(&json!({"data": {"id": "p1"}})),
        CatalogEnvelope::Single(json!({"id": "p1"}))
    );
    assert_eq!(
        CatalogEnvelope::from_value(&json!({"id": "p1"})),
        CatalogEnvelope::Single(json!({"id": "p1"}))
    );
    assert_eq!(
        CatalogEnvelope::from_value(&json!([{"id": "a"}])),
        CatalogEnvelope::List(vec![json!({"id": "a"})])
    );
}

#[test]
fn test_single_resource() {
    assert_eq!(
        single_resource(&json!({"data": [{"id": "first"}, {"id": "second"}]})),
        Some(json!({"id": "first"}))
    );
    assert_eq!(
        single_resource(&json!({"data": {"id": "p1", "attributes": {"name": "Mix"}}})),
        Some(json!({"id": "p1", "attributes": {"name": "Mix"}}))
    );
    assert_eq!(
        single_resource(&json!({"id": "raw"})),
        Some(json!({"id": "raw"}))
    );
    assert_eq!(single_resource(&json!(null)), None);
}

#[test]
fn test_single_resource_empty_list_falls_back() {
    // an empty list is not a resource, so the data object or raw value is used
    assert_eq!(
        single_resource(&json!({"data": {"items": []}})),
        Some(json!({"items": []}))
    );
    assert_eq!(
        single_resource(&json!({"data": []})),
        Some(json!({"data": []}))
    );
    assert_eq!(single_resource(&json!([])), Some(json!([])));

    // the list view of the same responses stays empty
    assert!(resource_list(&json!({"data": {"items": []}})).is_empty());
    assert!(resource_list(&json!([])).is_empty());
}

#[test]
fn test_resource_name_and_id() {
    let resource = json!({"id": "p.1", "attributes": {"name": "Road Trip"}});
    assert_eq!(resource_name(&resource), Some("Road Trip"));
    assert_eq!(resource_id(&resource), Some("p.1"));

    assert_eq!(resource_name(&json!({"name": "Flat"})), Some("Flat"));
    assert_eq!(resource_name(&json!({"id": "x"})), None);
}

#[test]
fn test_estimate_match_full_fields() {
    let estimate = estimate_match(&track("Blinding Lights", "The Weeknd", ""));
    assert_close(estimate.confidence, 0.85);
    assert!(estimate.match_found);
    assert_close(estimate.breakdown.title_bonus, 0.10);
    assert_close(estimate.breakdown.artist_bonus, 0.10);
    assert_close(estimate.breakdown.album_bonus, 0.0);
    assert_close(estimate.breakdown.keyword_penalty, 0.0);

    let estimate = estimate_match(&track("Blinding Lights", "The Weeknd", "Starboy"));
    assert_close(estimate.confidence, 0.90);
}

#[test]
fn test_estimate_match_keyword_inside_word() {
    // keywords match as substrings, so "After" counts as "ft"
    let estimate = estimate_match(&track("Blinding Lights", "The Weeknd", "After Hours"));
    assert_close(estimate.breakdown.album_bonus, 0.05);
    assert_close(estimate.breakdown.keyword_penalty, 0.05);
    assert_close(estimate.confidence, 0.85);
}

#[test]
fn test_estimate_match_short_fields() {
    let estimate = estimate_match(&track("Hi", "U2", ""));
    assert_close(estimate.confidence, 0.65);
    assert!(estimate.match_found);
    assert_close(estimate.breakdown.raw(), 0.65);
}

#[test]
fn test_estimate_match_keyword_penalty() {
    let estimate = estimate_match(&track("Levels (Radio Edit)", "Avicii", ""));
    assert_close(estimate.breakdown.keyword_penalty, 0.05);
    assert_close(estimate.confidence, 0.80);
}

#[test]
fn test_estimate_match_missing_fields() {
    for t in [track("", "Queen", ""), track("Yellow", "   ", "Parachutes")] {
        let estimate = estimate_match(&t);
        assert_close(estimate.confidence, 0.0);
        assert!(!estimate.match_found);
    }
}

#[test]
fn test_estimate_match_stays_within_bounds() {
    let samples = [
        track("Hi", "U2", ""),
        track("A Very Long Song Title", "Some Artist", "Some Album"),
        track("Live Remix Edit", "DJ Feat", "Extended Version"),
        track("Song 2 (2012 Remaster)", "Blur", "Blur"),
    ];

    for t in samples {
        let confidence = estimate_match(&t).confidence;
        assert!(
            (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence),
            "{} out of bounds for {:?}",
            confidence,
            t.title
        );
    }
}

#[test]
fn test_verify_manifest_sets_status_and_confidence() {
    let mut manifest = PlaylistManifest {
        name: "Mix".to_string(),
        tracks: vec![
            track("Blinding Lights", "The Weeknd", ""),
            track("Untitled", "", ""),
            track("Hi", "U2", "Pop"),
        ],
    };

    let matched = verify_manifest(&mut manifest);
    assert_eq!(matched, 2);

    assert_eq!(manifest.tracks[0].status, TrackStatus::Matched);
    assert_close(manifest.tracks[0].confidence.unwrap_or_default(), 0.85);

    assert_eq!(manifest.tracks[1].status, TrackStatus::Failed);
    assert_eq!(manifest.tracks[1].confidence, Some(0.0));

    assert_eq!(manifest.tracks[2].status, TrackStatus::Matched);
    assert_close(manifest.tracks[2].confidence.unwrap_or_default(), 0.70);
}

#[test]
fn test_apply_estimate_below_threshold() {
    let mut t = track("Title", "Artist", "");
    let estimate = MatchEstimate {
        confidence: 0.4,
        match_found: false,
        breakdown: ConfidenceBreakdown::default(),
    };

    apply_estimate(&mut t, &estimate);
    assert_eq!(t.status, TrackStatus::Failed);
    assert_eq!(t.confidence, Some(0.4));
}

#[test]
fn test_search_query_strips_brackets() {
    assert_eq!(
        search_query(&track("Die For You (Remix)", "The Weeknd", "")),
        "Die For You Remix The Weeknd"
    );
    assert_eq!(
        search_query(&track("Song [Live] {2019}", "  Band  ", "")),
        "Song Live 2019 Band"
    );
}
