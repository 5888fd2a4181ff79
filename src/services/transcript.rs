// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Transcript lookup: input parsing, track selection, and caching.

use crate::error::TranscriptError;
use crate::models::{Transcript, VideoId};
use crate::services::YoutubeClient;
use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::sync::Arc;

/// Cached transcript with the time it was fetched.
#[derive(Clone)]
pub struct CachedTranscript {
    transcript: Transcript,
    fetched_at: DateTime<Utc>,
}

/// Shared transcript cache keyed by video ID.
pub type TranscriptCache = Arc<DashMap<String, CachedTranscript>>;

/// Fetches transcripts for user input, picking the best available track.
#[derive(Clone)]
pub struct TranscriptService {
    client: YoutubeClient,
    languages: Vec<String>,
    cache: TranscriptCache,
    cache_ttl: Duration,
}

impl TranscriptService {
    /// Create a service. A zero `cache_ttl_secs` disables caching.
    pub fn new(client: YoutubeClient, languages: Vec<String>, cache_ttl_secs: u64) -> Self {
        Self {
            client,
            languages,
            cache: Arc::new(DashMap::new()),
            cache_ttl: Duration::seconds(cache_ttl_secs.min(i32::MAX as u64) as i64),
        }
    }

    /// Fetch the transcript for a video URL or ID.
    pub async fn fetch(&self, input: &str) -> Result<Transcript, TranscriptError> {
        let video_id = VideoId::parse(input)?;
        self.fetch_video(&video_id)
            .await
            .map_err(|e| e.with_input(input.trim()))
    }

    async fn fetch_video(&self, video_id: &VideoId) -> Result<Transcript, TranscriptError> {
        if let Some(cached) = self.get_cached(video_id) {
            tracing::debug!(video_id = %video_id, "Transcript cache hit");
            return Ok(cached);
        }

        let list = self.client.list_transcripts(video_id).await?;
        let track = list.select(&self.languages)?;

        if !self.languages.contains(&track.language_code) {
            tracing::info!(
                video_id = %video_id,
                language_code = %track.language_code,
                language = %track.language,
                "No transcript in a preferred language, using fallback"
            );
        }

        let segments = self.client.fetch_track(video_id, track).await?;

        let transcript = Transcript {
            video_id: video_id.clone(),
            language: track.language.clone(),
            language_code: track.language_code.clone(),
            is_generated: track.is_generated,
            segments,
        };

        tracing::info!(
            video_id = %video_id,
            language_code = %transcript.language_code,
            segments = transcript.segments.len(),
            "Transcript fetched"
        );

        self.put_cached(&transcript);
        Ok(transcript)
    }

    fn get_cached(&self, video_id: &VideoId) -> Option<Transcript> {
        if self.cache_ttl.is_zero() {
            return None;
        }

        let entry = self.cache.get(video_id.as_str())?;
        if Utc::now() - entry.fetched_at < self.cache_ttl {
            return Some(entry.transcript.clone());
        }
        drop(entry);

        self.cache.remove(video_id.as_str());
        None
    }

    /// Insert a transcript and drop every entry that has expired.
    fn put_cached(&self, transcript: &Transcript) {
        if self.cache_ttl.is_zero() {
            return;
        }

        let now = Utc::now();
        self.cache
            .retain(|_, cached| now - cached.fetched_at < self.cache_ttl);

        self.cache.insert(
            transcript.video_id.as_str().to_string(),
            CachedTranscript {
                transcript: transcript.clone(),
                fetched_at: now,
            },
        );
    }
}
