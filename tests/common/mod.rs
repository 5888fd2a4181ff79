// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use transcript_server::config::Config;
use transcript_server::routes::create_router;
use transcript_server::services::{TranscriptService, TranscriptStore, YoutubeClient};
use transcript_server::AppState;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const VIDEO_ID: &str = "abcdefghijk";

/// Create a test app pointed at a fake YouTube.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(youtube_base_url: &str, save_dir: PathBuf) -> (axum::Router, Arc<AppState>) {
    create_test_app_with_ttl(youtube_base_url, save_dir, 0)
}

#[allow(dead_code)]
pub fn create_test_app_with_ttl(
    youtube_base_url: &str,
    save_dir: PathBuf,
    cache_ttl_secs: u64,
) -> (axum::Router, Arc<AppState>) {
    let config = Config {
        youtube_base_url: youtube_base_url.to_string(),
        save_dir: save_dir.to_string_lossy().into_owned(),
        cache_ttl_secs,
        ..Config::test_default()
    };

    let client = YoutubeClient::new(&config.youtube_base_url, Duration::from_secs(5))
        .expect("Failed to build HTTP client");
    let transcript_service = TranscriptService::new(
        client,
        config.preferred_languages.clone(),
        config.cache_ttl_secs,
    );
    let store = TranscriptStore::new(&config.save_dir);

    let state = Arc::new(AppState {
        config,
        transcript_service,
        store,
    });

    (create_router(state.clone()), state)
}

/// A per-test directory under the system temp dir, removed first if left over.
#[allow(dead_code)]
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "transcript-server-{}-{}",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

/// Caption track JSON as it appears in the watch page.
/// Generated tracks carry `kind=asr` in their URL, as YouTube's do.
#[allow(dead_code)]
pub fn caption_track(server: &MockServer, lang: &str, name: &str, generated: bool) -> String {
    let (url_kind, kind) = if generated {
        ("&kind=asr", r#","kind":"asr""#)
    } else {
        ("", "")
    };
    format!(
        r#"{{"baseUrl":"{}/api/timedtext?v={}&lang={}{}","name":{{"simpleText":"{}"}},"languageCode":"{}"{},"isTranslatable":true}}"#,
        server.uri(),
        VIDEO_ID,
        lang,
        url_kind,
        name,
        lang,
        kind
    )
}

/// A watch page listing `tracks`.
#[allow(dead_code)]
pub fn watch_page(tracks: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html><html><body><script>var ytInitialPlayerResponse = {{"playabilityStatus":{{"status":"OK"}},"captions":{{"playerCaptionsTracklistRenderer":{{"captionTracks":[{}]}}}},"videoDetails":{{"videoId":"{}"}}}};</script></body></html>"#,
        tracks.join(","),
        VIDEO_ID
    )
}

/// A watch page for a playable video with captions turned off.
#[allow(dead_code)]
pub fn watch_page_without_captions() -> String {
    format!(
        r#"<html><script>var ytInitialPlayerResponse = {{"playabilityStatus":{{"status":"OK"}},"videoDetails":{{"videoId":"{}"}}}};</script></html>"#,
        VIDEO_ID
    )
}

/// Timed-text XML with one `<text>` element per line.
#[allow(dead_code)]
pub fn timed_text(lines: &[&str]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="utf-8" ?><transcript>"#);
    for (i, line) in lines.iter().enumerate() {
        xml.push_str(&format!(
            r#"<text start="{}.0" dur="1.5">{}</text>"#,
            i * 2,
            line
        ));
    }
    xml.push_str("</transcript>");
    xml
}

/// Serve `html` as the watch page for the test video.
#[allow(dead_code)]
pub async fn mount_watch_page(server: &MockServer, html: String) {
    Mock::given(method("GET"))
        .and(path("/watch"))
        .and(query_param("v", VIDEO_ID))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Serve `xml` as the timed text for one language.
#[allow(dead_code)]
pub async fn mount_timed_text(server: &MockServer, lang: &str, xml: String) {
    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("lang", lang))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(server)
        .await;
}

/// Serve `xml` as the auto-generated timed text for one language.
/// Mount before `mount_timed_text` for the same language so it wins.
#[allow(dead_code)]
pub async fn mount_generated_timed_text(server: &MockServer, lang: &str, xml: String) {
    Mock::given(method("GET"))
        .and(path("/api/timedtext"))
        .and(query_param("lang", lang))
        .and(query_param("kind", "asr"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(server)
        .await;
}

/// Build a form POST to `/`.
#[allow(dead_code)]
pub fn form_post(video_url: &str) -> Request<Body> {
    let body = format!("video_url={}", urlencoding::encode(video_url));
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// Read a response body as a string.
#[allow(dead_code)]
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
