// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML form for fetching and saving a transcript.

use crate::views::IndexPage;
use crate::AppState;
use axum::{
    extract::{rejection::FormRejection, Form, State},
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

const MISSING_INPUT: &str = "Please enter a YouTube Video ID or URL.";
const EMPTY_TRANSCRIPT: &str = "No transcript content was generated or fetched.";

/// Index page routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(show_form).post(submit))
}

/// Form fields posted from the index page.
#[derive(Deserialize)]
struct TranscriptForm {
    video_url: Option<String>,
}

/// Render the empty form.
async fn show_form() -> Html<String> {
    Html(IndexPage::default().render())
}

/// Fetch a transcript for the submitted URL, save it, and render the result.
///
/// Failures are reported on the page itself, so this always answers 200.
/// A body that isn't a urlencoded form counts as no input.
async fn submit(
    State(state): State<Arc<AppState>>,
    form: Result<Form<TranscriptForm>, FormRejection>,
) -> Html<String> {
    let input = match form {
        Ok(Form(form)) => form.video_url.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable form body");
            String::new()
        }
    };
    let mut page = IndexPage {
        input: Some(input.clone()),
        ..IndexPage::default()
    };

    if input.trim().is_empty() {
        page.error = Some(MISSING_INPUT.to_string());
        return Html(page.render());
    }

    let transcript = match state.transcript_service.fetch(&input).await {
        Ok(transcript) => transcript,
        Err(e) => {
            tracing::warn!(input = %input, error = %e, "Transcript fetch failed");
            page.error = Some(e.to_string());
            return Html(page.render());
        }
    };

    let text = transcript.plain_text();
    if text.is_empty() {
        page.error = Some(EMPTY_TRANSCRIPT.to_string());
        return Html(page.render());
    }

    match state.store.save(&transcript.video_id, &text).await {
        Ok(file_name) => page.filename = Some(file_name),
        Err(e) => {
            tracing::error!(video_id = %transcript.video_id, error = %e, "Failed to save transcript");
            page.error = Some(format!("Transcript fetched, but error saving to file: {}", e));
        }
    }

    page.transcript = Some(text);
    Html(page.render())
}
