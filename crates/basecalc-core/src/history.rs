//! Audit trail of completed calculations.
//!
//! Front ends record a [`NewEntry`] through the [`HistorySink`] trait after
//! every successful computation. [`History`] is the in-memory sink: newest
//! entry first, bounded to [`HISTORY_CAPACITY`] entries.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of entries kept by [`History`].
pub const HISTORY_CAPACITY: usize = 50;

/// Which tool produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryKind {
    Conversion,
    Math,
    Matrix,
}

/// A calculation summary before it is stamped by the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub kind: HistoryKind,
    pub operation: String,
    pub input: String,
    pub result: String,
    pub details: Option<String>,
}

/// An immutable snapshot of a past calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    pub kind: HistoryKind,
    pub operation: String,
    pub input: String,
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Anything that accepts calculation summaries.
pub trait HistorySink {
    fn record(&mut self, entry: NewEntry);
}

/// Discards every entry.
impl HistorySink for () {
    fn record(&mut self, _entry: NewEntry) {}
}

/// Bounded in-memory history, newest first.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
    next_id: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that keeps at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Entries, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
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
}

impl HistorySink for History {
    fn record(&mut self, entry: NewEntry) {
        if self.capacity == 0 {
            return;
        }
        let stamped = HistoryEntry {
            id: self.next_id,
            timestamp: Utc::now(),
            kind: entry.kind,
            operation: entry.operation,
            input: entry.input,
            result: entry.result,
            details: entry.details,
        };
        self.next_id += 1;
        self.entries.push_front(stamped);
        self.entries.truncate(self.capacity);
        tracing::trace!(len = self.entries.len(), "history entry recorded");
    }
}
