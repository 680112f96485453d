/// Bounded, newest-first history of exported tab states
use serde::{Deserialize, Serialize};

use crate::codec::{decode, encode};
use crate::domain::build_preview;
use crate::error::{Result, TabStateError};

/// Maximum number of entries kept in the history log
pub const HISTORY_CAPACITY: usize = 20;

/// One saved export. Persisted as
/// `{id, timestamp, data, tabCount, preview}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: u64,
    #[serde(rename = "data")]
    pub token: String,
    pub tab_count: usize,
    pub preview: String,
}

impl HistoryEntry {
    /// Build an entry for `urls` created at `timestamp`.
    pub fn new<S: AsRef<str>>(id: u64, timestamp: u64, urls: &[S]) -> HistoryEntry {
        HistoryEntry {
            id,
            timestamp,
            token: encode(urls),
            tab_count: urls.len(),
            preview: build_preview(urls),
        }
    }

    pub fn urls(&self) -> Result<Vec<String>> {
        decode(&self.token)
    }
}

/// The ordered history, newest entry first.
///
/// Serializes transparently as the bare array stored under the history key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        HistoryLog {
            entries: Vec::new(),
        }
    }

    /// Insert at the front, evicting from the back until `capacity` holds.
    /// Returns the evicted entries, oldest last.
    pub fn insert(&mut self, entry: HistoryEntry, capacity: usize) -> Vec<HistoryEntry> {
        self.entries.insert(0, entry);
        let keep = capacity.min(self.entries.len());
        self.entries.split_off(keep)
    }

    /// The id for an entry created at `now`. Ids are creation timestamps but
    /// must stay unique, so a clock that has not moved past the newest entry
    /// is bumped one millisecond beyond it.
    pub fn next_id(&self, now: u64) -> u64 {
        match self.entries.first() {
            Some(newest) if now <= newest.id => newest.id.saturating_add(1),
            _ => now,
        }
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Decode the entry saved under `id`.
    pub fn restore(&self, id: u64) -> Result<Vec<String>> {
        self.get(id).ok_or(TabStateError::NotFound(id))?.urls()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
