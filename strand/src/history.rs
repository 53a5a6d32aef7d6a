//! Append-only log of `(token, content, cursor)` snapshots.
//!
//! The log is seeded with one empty sentinel entry so "undo with nothing to
//! undo" needs no special case: the log never shrinks below length 1, and
//! undo at the sentinel is a no-op. Meta-commands (`?`, `r`, `s`, `u`) and
//! states with empty content are never recorded.

use crate::command;

/// One recorded snapshot: the raw command token plus the resulting state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub token: String,
    pub content: String,
    pub cursor: usize,
}

impl HistoryEntry {
    fn sentinel() -> Self {
        Self {
            token: String::new(),
            content: String::new(),
            cursor: 0,
        }
    }
}

pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::sentinel()],
        }
    }

    /// Number of entries, sentinel included. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records the state that `token` produced. Meta-commands and empty
    /// content are silently skipped.
    pub fn record(&mut self, token: &str, content: &str, cursor: usize) {
        if content.is_empty() || command::is_meta(token) {
            return;
        }
        self.entries.push(HistoryEntry {
            token: token.to_string(),
            content: content.to_string(),
            cursor,
        });
        tracing::debug!(token, entries = self.entries.len(), "recorded");
    }

    /// Pops the newest entry and returns the `(content, cursor)` snapshot to
    /// restore, or `None` when only the sentinel remains.
    pub fn undo(&mut self) -> Option<(String, usize)> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop();
        self.entries
            .last()
            .map(|entry| (entry.content.clone(), entry.cursor))
    }

    /// Token of the last real command, for `repeat`. Skips one entry back
    /// past a meta token; the sentinel's empty token means no target.
    pub fn repeat_target(&self) -> Option<&str> {
        let last = self.entries.last()?;
        let token = if matches!(last.token.as_str(), "?" | "u" | "r") {
            let previous = self.entries.len().checked_sub(2)?;
            self.entries.get(previous)?.token.as_str()
        } else {
            last.token.as_str()
        };
        if token.is_empty() {
            return None;
        }
        Some(token)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
