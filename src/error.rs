// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Why a transcript could not be produced for a user's input.
///
/// The `Display` text is shown to the user as-is on the HTML page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptError {
    #[error("Invalid video ID or URL format: {0}")]
    InvalidInput(String),

    #[error("Could not extract Video ID from: {0}")]
    MissingVideoId(String),

    #[error("Transcripts are disabled for the video: {0}")]
    TranscriptsDisabled(String),

    #[error(
        "No transcript could be found for the video: {input}. (Processed Video ID: {video_id}). \
         This could be due to an incorrect video ID, the video not having any transcripts, \
         the video being unavailable, or the requested language not being available."
    )]
    NoTranscriptFound { input: String, video_id: String },

    #[error("The video is no longer available: {0}")]
    VideoUnavailable(String),

    #[error("YouTube is receiving too many requests from this server. Please try again later.")]
    TooManyRequests,

    #[error(
        "XML ParseError: {detail}. This often occurs with live streams (like '{video_id}'), \
         videos with no valid transcript data, or if YouTube returns an empty/malformed \
         transcript file. (While processing Video ID: {video_id})"
    )]
    Parse { video_id: String, detail: String },

    #[error("An unexpected error occurred: {detail} (While processing Video ID: {video_id})")]
    Upstream { video_id: String, detail: String },
}

impl TranscriptError {
    /// Attach the user's original input where the error only knew the video ID.
    pub fn with_input(self, input: &str) -> Self {
        match self {
            TranscriptError::TranscriptsDisabled(_) => {
                TranscriptError::TranscriptsDisabled(input.to_string())
            }
            TranscriptError::NoTranscriptFound { video_id, .. } => {
                TranscriptError::NoTranscriptFound {
                    input: input.to_string(),
                    video_id,
                }
            }
            other => other,
        }
    }
}

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("YouTube error: {0}")]
    Upstream(String),
}

impl From<TranscriptError> for AppError {
    fn from(err: TranscriptError) -> Self {
        let msg = err.to_string();
        match err {
            TranscriptError::InvalidInput(_) | TranscriptError::MissingVideoId(_) => {
                AppError::BadRequest(msg)
            }
            TranscriptError::TranscriptsDisabled(_)
            | TranscriptError::NoTranscriptFound { .. }
            | TranscriptError::VideoUnavailable(_) => AppError::NotFound(msg),
            TranscriptError::TooManyRequests => AppError::RateLimited(msg),
            TranscriptError::Parse { .. } | TranscriptError::Upstream { .. } => {
                AppError::Upstream(msg)
            }
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::RateLimited(msg) => (
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                Some(msg.clone()),
            ),
            AppError::Upstream(msg) => {
                tracing::warn!(error = %msg, "YouTube request failed");
                (StatusCode::BAD_GATEWAY, "youtube_error", Some(msg.clone()))
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
