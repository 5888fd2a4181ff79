// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod transcript;
pub mod video;

pub use transcript::{Segment, TrackInfo, Transcript, TranscriptList};
pub use video::VideoId;
