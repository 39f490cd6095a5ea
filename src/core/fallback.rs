//! Local fallback for events the database could not take.
//!
//! Events are kept as a pretty-printed JSON array, newest first, so the
//! operator can inspect the file by hand.

use crate::errors::AppResult;
use crate::models::event::NewEvent;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FallbackFile {
    path: PathBuf,
}

impl FallbackFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Events saved locally so far. A missing file means none.
    pub fn load(&self) -> AppResult<Vec<NewEvent>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Prepend `ev` and rewrite the file. Returns the number of pending events.
    pub fn append(&self, ev: &NewEvent) -> AppResult<usize> {
        let mut pending = self.load()?;
        pending.insert(0, ev.clone());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&pending)?)?;

        tracing::info!(path = %self.path.display(), pending = pending.len(), "event saved locally");
        Ok(pending.len())
    }

    pub fn pending_for_date(&self, date: &str) -> AppResult<Vec<NewEvent>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|e| e.date == date)
            .collect())
    }
}
