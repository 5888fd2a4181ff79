// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API routes.

use crate::error::{AppError, Result};
use crate::models::{Segment, VideoId};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/transcript", get(get_transcript))
}

#[derive(Deserialize)]
struct TranscriptQuery {
    /// YouTube URL or bare video ID
    video: Option<String>,
}

/// Transcript response.
#[derive(Serialize)]
pub struct TranscriptResponse {
    pub video_id: VideoId,
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub text: String,
    pub segments: Vec<Segment>,
    pub fetched_at: String,
}

/// Fetch a transcript as JSON. Nothing is written to disk.
async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranscriptQuery>,
) -> Result<Json<TranscriptResponse>> {
    let input = params
        .video
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("missing 'video' parameter".to_string()))?;

    let transcript = state.transcript_service.fetch(&input).await?;
    let text = transcript.plain_text();

    Ok(Json(TranscriptResponse {
        video_id: transcript.video_id,
        language: transcript.language,
        language_code: transcript.language_code,
        is_generated: transcript.is_generated,
        text,
        segments: transcript.segments,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    }))
}
