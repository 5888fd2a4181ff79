// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saves fetched transcripts as text files on the server.

use crate::models::VideoId;
use std::path::{Path, PathBuf};

/// Writes transcripts to `<dir>/transcript_<video id>.txt`.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save `text` for `video_id`, replacing any earlier file.
    /// Returns the file name (not the full path).
    pub async fn save(&self, video_id: &VideoId, text: &str) -> Result<String, StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::CreateDir {
                path: self.dir.display().to_string(),
                source: e,
            })?;

        let file_name = video_id.file_name();
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|e| StorageError::Write {
                path: path.display().to_string(),
                source: e,
            })?;

        tracing::info!(path = %path.display(), bytes = text.len(), "Transcript saved");
        Ok(file_name)
    }
}

/// Transcript file errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}
