// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Caption tracks and fetched transcripts.

use crate::error::TranscriptError;
use crate::models::VideoId;
use serde::Serialize;

/// One caption track YouTube publishes for a video.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackInfo {
    /// Human-readable language name ("English (auto-generated)")
    pub language: String,
    /// Language code ("en", "de", "pt-BR")
    pub language_code: String,
    /// True for automatic speech recognition tracks
    pub is_generated: bool,
    pub is_translatable: bool,
    /// URL of the timed-text XML
    pub base_url: String,
}

/// All caption tracks available for one video.
#[derive(Debug, Clone)]
pub struct TranscriptList {
    pub video_id: VideoId,
    pub tracks: Vec<TrackInfo>,
}

impl TranscriptList {
    /// First manually created track matching `languages`, in priority order.
    pub fn find_manually_created(&self, languages: &[String]) -> Option<&TrackInfo> {
        self.find(languages, false)
    }

    /// First auto-generated track matching `languages`, in priority order.
    pub fn find_generated(&self, languages: &[String]) -> Option<&TrackInfo> {
        self.find(languages, true)
    }

    /// Pick the track to fetch: manual in a preferred language, then
    /// generated in a preferred language, then whatever comes first.
    pub fn select(&self, languages: &[String]) -> Result<&TrackInfo, TranscriptError> {
        self.find_manually_created(languages)
            .or_else(|| self.find_generated(languages))
            .or_else(|| self.tracks.first())
            .ok_or_else(|| TranscriptError::NoTranscriptFound {
                input: self.video_id.to_string(),
                video_id: self.video_id.to_string(),
            })
    }

    fn find(&self, languages: &[String], generated: bool) -> Option<&TrackInfo> {
        languages.iter().find_map(|lang| {
            self.tracks
                .iter()
                .find(|t| t.is_generated == generated && &t.language_code == lang)
        })
    }
}

/// One timed line of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub text: String,
    /// Offset from the start of the video, in seconds
    pub start: f64,
    /// Seconds the line stays on screen
    pub duration: f64,
}

/// A fetched transcript.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    pub video_id: VideoId,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub segments: Vec<Segment>,
}

impl Transcript {
    /// The whole transcript as one line, segments separated by a space.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for segment in &self.segments {
            text.push_str(&segment.text);
            text.push(' ');
        }
        text.trim().to_string()
    }
}
