// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod storage;
pub mod transcript;
pub mod youtube;

pub use storage::{StorageError, TranscriptStore};
pub use transcript::TranscriptService;
pub use youtube::YoutubeClient;
