use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub text: String,
    /// RFC 3339 local timestamp of the search.
    pub timestamp: String,
}

/// Ordered search history, newest first, bounded by `capacity`.
///
/// Owned by the event loop; there are no concurrent writers.
#[derive(Debug)]
pub struct SearchHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record a search. Identical text moves to the front instead of
    /// duplicating; the oldest entry past capacity is evicted.
    pub fn add(&mut self, text: &str) {
        self.entries.retain(|e| e.text != text);
        self.entries.insert(
            0,
            HistoryEntry {
                text: text.to_string(),
                timestamp: chrono::Local::now().to_rfc3339(),
            },
        );
        self.entries.truncate(self.capacity);
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Load from a JSON file; a missing file yields an empty history.
    pub fn load(path: &Path, capacity: usize) -> Result<Self, CoreError> {
        let mut history = Self::new(capacity);
        if path.exists() {
            let data = fs::read_to_string(path)?;
            history.entries = serde_json::from_str(&data)?;
            history.entries.truncate(capacity);
        }
        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
