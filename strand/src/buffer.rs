//! Single-line text buffer with a clamped cursor.
//!
//! [`LineBuffer`] owns the line under edit and the cursor position, an
//! insertion point between characters measured in char offsets. Every
//! mutation funnels through [`LineBuffer::replace_range`] so that insert,
//! append, and delete share the same clamping semantics.
//!
//! Cursor clamping is uniform across movement and mutation: the target is
//! clamped into `[0, len]`, and when the content is non-empty a cursor that
//! would sit at the end-of-line position steps back onto the last character.

/// Byte offset of the char at `pos`, or the end of the string when `pos`
/// is past the last character.
pub(crate) fn char_to_byte(s: &str, pos: usize) -> usize {
    s.char_indices().nth(pos).map(|(i, _)| i).unwrap_or(s.len())
}

/// The current line content plus cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    content: String,
    cursor: usize,
}

impl LineBuffer {
    /// Creates an empty buffer with the cursor at 0.
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
        }
    }

    /// Creates a buffer over `text` with the cursor at 0.
    pub fn with_text(text: &str) -> Self {
        Self {
            content: text.to_string(),
            cursor: 0,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Cursor position as a char offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Content length in chars.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Clamps `target` into `[0, len]`, stepping back one when it would sit
    /// at the end-of-line position of non-empty content.
    fn clamp(&self, target: isize) -> usize {
        let len = self.len() as isize;
        let mut pos = target.clamp(0, len);
        if len > 0 && pos == len {
            pos = len - 1;
        }
        pos as usize
    }

    /// Moves the cursor by `delta`. Returns `false` without moving when the
    /// buffer is empty, so the caller can re-prompt instead.
    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if self.is_empty() {
            return false;
        }
        self.cursor = self.clamp(self.cursor as isize + delta);
        true
    }

    /// Moves the cursor to an absolute position, clamped.
    pub fn move_cursor_to(&mut self, target: usize) {
        self.cursor = self.clamp(target as isize);
    }

    /// Replaces chars `[begin, end)` with `inserted`, then repositions the
    /// cursor by `delta` relative to its pre-mutation value.
    ///
    /// This is the single mutation primitive; the clamp rule above applies
    /// to the repositioned cursor.
    pub fn replace_range(&mut self, begin: usize, end: usize, delta: isize, inserted: &str) {
        let b = char_to_byte(&self.content, begin);
        let e = char_to_byte(&self.content, end);
        self.content.replace_range(b..e, inserted);
        self.cursor = self.clamp(self.cursor as isize + delta);
        tracing::trace!(cursor = self.cursor, "buffer mutated");
    }

    /// Splices `text` in immediately before the cursor. The cursor lands
    /// just past the inserted text, subject to the end-of-line step-back.
    pub fn insert_before(&mut self, text: &str) {
        let at = self.cursor;
        self.replace_range(at, at, text.chars().count() as isize, text);
    }

    /// Splices `text` in immediately after the character at the cursor. The
    /// cursor lands at the new end of line, subject to the step-back (net:
    /// the last inserted character).
    pub fn append_after(&mut self, text: &str) {
        let at = (self.cursor + 1).min(self.len());
        let delta = (self.len() + text.chars().count()) as isize - self.cursor as isize;
        self.replace_range(at, at, delta, text);
    }

    /// Removes the character at the cursor. No-op when the cursor is at or
    /// past end-of-line; otherwise the cursor stays put, then clamps.
    pub fn delete_at_cursor(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        self.replace_range(self.cursor, self.cursor + 1, 0, "");
    }

    /// Removes the word span `[begin, end)` located by
    /// [`crate::word::word_span`], strips whitespace left at the head of the
    /// line, and repositions the cursor: to 0 when the span began the line,
    /// to one past `begin` otherwise.
    pub fn delete_word_span(&mut self, begin: usize, end: usize) {
        let delta = if begin == 0 {
            -(self.cursor as isize)
        } else {
            begin as isize + 1 - self.cursor as isize
        };
        let b = char_to_byte(&self.content, begin);
        let e = char_to_byte(&self.content, end);
        self.content.replace_range(b..e, "");
        let stripped = self.content.trim_start().len();
        let cut = self.content.len() - stripped;
        if cut > 0 {
            self.content.drain(..cut);
        }
        self.cursor = self.clamp(self.cursor as isize + delta);
        tracing::trace!(cursor = self.cursor, "word deleted");
    }

    /// Restores a `(content, cursor)` snapshot taken by the history log.
    pub fn restore(&mut self, content: &str, cursor: usize) {
        self.content.clear();
        self.content.push_str(content);
        self.cursor = self.clamp(cursor as isize);
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}
