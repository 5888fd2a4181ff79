// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! YouTube client for listing caption tracks and downloading transcripts.
//!
//! Handles:
//! - Caption track discovery from the watch page
//! - Timed-text XML download and parsing
//! - Rate limit detection (recaptcha page or HTTP 429)

use crate::error::TranscriptError;
use crate::models::{Segment, TrackInfo, TranscriptList, VideoId};
use quick_xml::escape::{resolve_html5_entity, unescape_with};
use serde::Deserialize;
use std::time::Duration;

/// Marks the start of the captions JSON inside the watch page.
const CAPTIONS_MARKER: &str = "\"captions\":";

/// YouTube client.
#[derive(Clone)]
pub struct YoutubeClient {
    http: reqwest::Client,
    base_url: String,
}

impl YoutubeClient {
    /// Create a client against `base_url` (normally `https://www.youtube.com`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("transcript-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List the caption tracks published for a video.
    pub async fn list_transcripts(
        &self,
        video_id: &VideoId,
    ) -> Result<TranscriptList, TranscriptError> {
        let url = format!("{}/watch", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[("v", video_id.as_str())])
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US")
            .send()
            .await
            .map_err(|e| upstream(video_id, format!("watch page request failed - {}", e)))?;

        let html = self.check_response_text(video_id, response).await?;
        let tracks = parse_caption_tracks(video_id, &html)?;

        tracing::debug!(
            video_id = %video_id,
            tracks = tracks.len(),
            "Caption tracks listed"
        );

        Ok(TranscriptList {
            video_id: video_id.clone(),
            tracks,
        })
    }

    /// Download one caption track and parse it into segments.
    pub async fn fetch_track(
        &self,
        video_id: &VideoId,
        track: &TrackInfo,
    ) -> Result<Vec<Segment>, TranscriptError> {
        let url = self.resolve(&track.base_url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| upstream(video_id, format!("transcript request failed - {}", e)))?;

        let xml = self.check_response_text(video_id, response).await?;
        parse_timed_text(video_id, &xml)
    }

    /// Caption URLs are absolute in practice; relative ones hang off `base_url`.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }

    /// Check response status and return the body text.
    async fn check_response_text(
        &self,
        video_id: &VideoId,
        response: reqwest::Response,
    ) -> Result<String, TranscriptError> {
        let status = response.status();

        if status.as_u16() == 429 {
            tracing::warn!(video_id = %video_id, "YouTube rate limit hit (429)");
            return Err(TranscriptError::TooManyRequests);
        }

        if !status.is_success() {
            return Err(upstream(video_id, format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| upstream(video_id, format!("failed to read response body - {}", e)))
    }
}

fn upstream(video_id: &VideoId, detail: String) -> TranscriptError {
    TranscriptError::Upstream {
        video_id: video_id.to_string(),
        detail,
    }
}

// ─── Watch page ──────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    caption_tracks: Option<Vec<CaptionTrack>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaptionTrack {
    base_url: String,
    #[serde(default)]
    name: TrackName,
    language_code: String,
    kind: Option<String>,
    #[serde(default)]
    is_translatable: bool,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TrackName {
    simple_text: Option<String>,
    #[serde(default)]
    runs: Vec<TextRun>,
}

#[derive(Deserialize)]
struct TextRun {
    text: String,
}

impl From<CaptionTrack> for TrackInfo {
    fn from(track: CaptionTrack) -> Self {
        let language = track
            .name
            .simple_text
            .unwrap_or_else(|| track.name.runs.into_iter().map(|r| r.text).collect());

        TrackInfo {
            language,
            language_code: track.language_code,
            is_generated: track.kind.as_deref() == Some("asr"),
            is_translatable: track.is_translatable,
            base_url: track.base_url,
        }
    }
}

/// Pull the caption track list out of a watch page.
pub fn parse_caption_tracks(
    video_id: &VideoId,
    html: &str,
) -> Result<Vec<TrackInfo>, TranscriptError> {
    let Some((_, rest)) = html.split_once(CAPTIONS_MARKER) else {
        if html.contains("class=\"g-recaptcha\"") {
            tracing::warn!(video_id = %video_id, "YouTube served a recaptcha page");
            return Err(TranscriptError::TooManyRequests);
        }
        if !html.contains("\"playabilityStatus\":") {
            return Err(TranscriptError::VideoUnavailable(video_id.to_string()));
        }
        return Err(TranscriptError::TranscriptsDisabled(video_id.to_string()));
    };

    // Only the first JSON value after the marker belongs to the captions.
    let captions = serde_json::Deserializer::from_str(rest)
        .into_iter::<Captions>()
        .next()
        .ok_or_else(|| upstream(video_id, "captions data missing".to_string()))?
        .map_err(|e| upstream(video_id, format!("invalid captions data - {}", e)))?;

    let tracks = captions
        .player_captions_tracklist_renderer
        .and_then(|r| r.caption_tracks)
        .ok_or_else(|| TranscriptError::TranscriptsDisabled(video_id.to_string()))?;

    Ok(tracks.into_iter().map(TrackInfo::from).collect())
}

// ─── Timed text ──────────────────────────────────────────────

#[derive(Deserialize)]
struct TimedText {
    #[serde(rename = "text", default)]
    lines: Vec<TimedLine>,
}

#[derive(Deserialize)]
struct TimedLine {
    #[serde(rename = "@start")]
    start: f64,
    #[serde(rename = "@dur", default)]
    dur: f64,
    #[serde(rename = "$text", default)]
    text: String,
}

/// Parse a `<transcript><text start=".." dur="..">..</text></transcript>` document.
pub fn parse_timed_text(video_id: &VideoId, xml: &str) -> Result<Vec<Segment>, TranscriptError> {
    if xml.trim().is_empty() {
        return Err(TranscriptError::Parse {
            video_id: video_id.to_string(),
            detail: "no element found: line 1, column 0".to_string(),
        });
    }

    let doc: TimedText = quick_xml::de::from_str(xml).map_err(|e| TranscriptError::Parse {
        video_id: video_id.to_string(),
        detail: e.to_string(),
    })?;

    Ok(doc
        .lines
        .into_iter()
        .map(|line| Segment {
            text: decode_entities(&strip_tags(&line.text)),
            start: line.start,
            duration: line.dur,
        })
        .collect())
}

/// Remove complete inline tags such as `<font color="#E5E5E5">`.
/// A `<` with no closing `>` after it is caption text ("I <3 you") and stays.
fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        match rest[lt..].find('>') {
            Some(gt) => rest = &rest[lt + gt + 1..],
            None => {
                rest = &rest[lt..];
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Decode the HTML entities YouTube double-escapes inside caption text.
/// Text with a stray `&` that isn't an entity is kept as-is.
fn decode_entities(text: &str) -> String {
    match unescape_with(text, resolve_html5_entity) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::debug!(error = %e, "Caption text left undecoded");
            text.to_string()
        }
    }
}
