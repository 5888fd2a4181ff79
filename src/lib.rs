// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Transcript server: fetch YouTube transcripts through a small web page
//!
//! This crate provides the HTTP front end, the YouTube caption client,
//! and on-disk storage for fetched transcripts.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod views;

use config::Config;
use services::{TranscriptService, TranscriptStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub transcript_service: TranscriptService,
    pub store: TranscriptStore,
}
