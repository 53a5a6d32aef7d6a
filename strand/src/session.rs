//! The editing session: state ownership and command dispatch.
//!
//! [`EditorSession`] owns the buffer, cursor visibility flag, marker
//! overlay, and history log, and processes exactly one command token per
//! [`EditorSession::dispatch`] call. Dispatch never returns an error:
//! invalid input is absorbed as [`DispatchResult::Reprompt`] and the
//! session continues (the only terminal outcome is the `q` token).

use crate::{
    buffer::LineBuffer,
    command::{self, Command},
    history::History,
    marker::Marker,
    word,
};

/// What the prompt loop should do after one dispatched token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult {
    /// Print this and request the next token.
    Render(String),
    /// Nothing to print; request the next token.
    Reprompt,
    /// Clean session end (`q`).
    Terminate,
}

/// One single-user editing session. Single-threaded and synchronous: each
/// dispatched command runs to completion before the next is read.
pub struct EditorSession {
    buffer: LineBuffer,
    cursor_visible: bool,
    marker: Marker,
    history: History,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: LineBuffer::with_text(text),
            cursor_visible: false,
            marker: Marker::default(),
            history: History::new(),
        }
    }

    /// Replaces the overlay marker sequences (from config).
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Content with the cursor overlay applied when visibility is on.
    pub fn current_display(&self) -> String {
        if self.cursor_visible {
            self.marker.mark_at(self.buffer.content(), self.buffer.cursor())
        } else {
            self.buffer.content().to_string()
        }
    }

    /// Consumes one raw command token. Recognized commands mutate the
    /// session; everything else is a silent no-op that requests another
    /// token. Non-meta commands that leave non-empty content are recorded
    /// into the history afterwards.
    pub fn dispatch(&mut self, token: &str) -> DispatchResult {
        let Some(parsed) = Command::parse(token) else {
            tracing::debug!(token, "ignoring invalid token");
            return DispatchResult::Reprompt;
        };
        tracing::debug!(token, ?parsed, "dispatching");

        let result = match parsed {
            Command::Quit => return DispatchResult::Terminate,
            Command::Help => DispatchResult::Render(command::help_text().to_string()),
            Command::Show => DispatchResult::Render(self.current_display()),
            Command::Undo => self.undo(),
            Command::Repeat => self.repeat(),
            Command::ToggleCursor => self.toggle_cursor(),
            Command::MoveLeft => self.move_cursor(-1),
            Command::MoveRight => self.move_cursor(1),
            Command::MoveLineStart => self.move_cursor_to(0),
            Command::MoveLineEnd => self.move_cursor_to(self.buffer.len()),
            Command::NextWord => self.next_word(),
            Command::PrevWord => self.prev_word(),
            Command::Insert(text) => self.insert(&text),
            Command::Append(text) => self.append(&text),
            Command::DeleteChar => self.delete_char(),
            Command::DeleteWord => self.delete_word(),
        };

        self.history
            .record(token, self.buffer.content(), self.buffer.cursor());
        result
    }

    fn rendered(&self) -> DispatchResult {
        if self.buffer.is_empty() {
            DispatchResult::Reprompt
        } else {
            DispatchResult::Render(self.current_display())
        }
    }

    fn toggle_cursor(&mut self) -> DispatchResult {
        self.cursor_visible = !self.cursor_visible;
        self.rendered()
    }

    fn move_cursor(&mut self, delta: isize) -> DispatchResult {
        if !self.buffer.move_cursor(delta) {
            return DispatchResult::Reprompt;
        }
        self.rendered()
    }

    fn move_cursor_to(&mut self, target: usize) -> DispatchResult {
        if self.buffer.is_empty() {
            return DispatchResult::Reprompt;
        }
        self.buffer.move_cursor_to(target);
        self.rendered()
    }

    fn next_word(&mut self) -> DispatchResult {
        if self.buffer.is_empty() {
            return DispatchResult::Reprompt;
        }
        if let Some(target) = word::next_word_start(self.buffer.content(), self.buffer.cursor()) {
            self.buffer.move_cursor_to(target);
        }
        self.rendered()
    }

    fn prev_word(&mut self) -> DispatchResult {
        if self.buffer.is_empty() {
            return DispatchResult::Reprompt;
        }
        if let Some(target) = word::prev_word_start(self.buffer.content(), self.buffer.cursor()) {
            self.buffer.move_cursor_to(target);
        }
        self.rendered()
    }

    fn insert(&mut self, text: &str) -> DispatchResult {
        self.buffer.insert_before(text);
        self.rendered()
    }

    fn append(&mut self, text: &str) -> DispatchResult {
        self.buffer.append_after(text);
        self.rendered()
    }

    fn delete_char(&mut self) -> DispatchResult {
        if self.buffer.is_empty() {
            return DispatchResult::Reprompt;
        }
        self.buffer.delete_at_cursor();
        self.rendered()
    }

    fn delete_word(&mut self) -> DispatchResult {
        if self.buffer.is_empty() {
            return DispatchResult::Reprompt;
        }
        let (begin, end) = word::word_span(self.buffer.content(), self.buffer.cursor());
        self.buffer.delete_word_span(begin, end);
        self.rendered()
    }

    fn undo(&mut self) -> DispatchResult {
        match self.history.undo() {
            Some((content, cursor)) => {
                self.buffer.restore(&content, cursor);
                self.rendered()
            }
            None => DispatchResult::Reprompt,
        }
    }

    fn repeat(&mut self) -> DispatchResult {
        let Some(target) = self.history.repeat_target().map(str::to_string) else {
            return DispatchResult::Reprompt;
        };
        if !command::is_replayable(&target) {
            tracing::debug!(target, "repeat target is not replayable");
            return DispatchResult::Reprompt;
        }
        self.dispatch(&target)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
