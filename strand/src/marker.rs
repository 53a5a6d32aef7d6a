//! Display-time cursor overlay.
//!
//! The overlay wraps the character under the cursor in start/end marker
//! sequences when rendering; the underlying content is never touched. The
//! defaults are the ANSI green-background escape codes; both sequences can
//! be overridden from the config file for terminals that want something
//! else.

use crate::buffer::char_to_byte;

pub const DEFAULT_MARKER_START: &str = "\x1b[42m";
pub const DEFAULT_MARKER_END: &str = "\x1b[0m";

/// Start/end sequences wrapped around the character at the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub start: String,
    pub end: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            start: DEFAULT_MARKER_START.to_string(),
            end: DEFAULT_MARKER_END.to_string(),
        }
    }
}

impl Marker {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Returns `content` with the char at `pos` wrapped in the marker
    /// sequences. An out-of-range `pos` (the cursor parked at end-of-line)
    /// marks the last character instead; empty content is returned as-is.
    pub fn mark_at(&self, content: &str, pos: usize) -> String {
        if content.is_empty() {
            return content.to_string();
        }
        let last = content.chars().count() - 1;
        let pos = pos.min(last);
        let b = char_to_byte(content, pos);
        let e = char_to_byte(content, pos + 1);
        format!(
            "{}{}{}{}{}",
            &content[..b],
            self.start,
            &content[b..e],
            self.end,
            &content[e..]
        )
    }

    /// Strips every marker sequence, restoring the raw content.
    pub fn unmark(&self, content: &str) -> String {
        content.replace(&self.start, "").replace(&self.end, "")
    }
}
