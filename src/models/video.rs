// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! YouTube video ID extraction from user input.

use crate::error::TranscriptError;
use serde::Serialize;
use std::fmt;

/// Length of a bare YouTube video ID.
const VIDEO_ID_LEN: usize = 11;

/// Longest file stem used when saving a transcript.
const MAX_FILE_STEM_LEN: usize = 50;

/// A YouTube video ID extracted from a URL or given directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Extract a video ID from a watch URL, a `youtu.be` short link, a
    /// Shorts URL, or a bare 11-character ID.
    pub fn parse(input: &str) -> Result<Self, TranscriptError> {
        let input = input.trim();

        let extracted = if input.contains("youtube.com/watch?v=") {
            after(input, "v=").split('&').next()
        } else if input.contains("youtu.be/") {
            input.rsplit('/').next().and_then(|s| s.split('?').next())
        } else if input.contains("youtube.com/shorts/") {
            after(input, "shorts/").split('?').next()
        } else if is_bare_id(input) {
            Some(input)
        } else {
            return Err(TranscriptError::InvalidInput(input.to_string()));
        };

        match extracted {
            Some(id) if !id.is_empty() => Ok(Self(id.to_string())),
            _ => Err(TranscriptError::MissingVideoId(input.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe stem derived from the ID.
    ///
    /// IDs pulled out of URLs are not validated, so anything outside
    /// `[A-Za-z0-9_-]` is dropped here.
    pub fn safe_file_stem(&self) -> String {
        let stem: String = self
            .0
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .take(MAX_FILE_STEM_LEN)
            .collect();

        if stem.is_empty() {
            "unknown_video".to_string()
        } else {
            stem
        }
    }

    /// Name of the file a transcript for this video is saved under.
    pub fn file_name(&self) -> String {
        format!("transcript_{}.txt", self.safe_file_stem())
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text after the first occurrence of `marker`.
fn after<'a>(input: &'a str, marker: &str) -> &'a str {
    input
        .split_once(marker)
        .map(|(_, rest)| rest)
        .unwrap_or_default()
}

fn is_bare_id(input: &str) -> bool {
    input.len() == VIDEO_ID_LEN
        && input
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
