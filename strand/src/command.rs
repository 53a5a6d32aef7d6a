//! Command tokens and their two-stage parse.
//!
//! Raw tokens are classified into a [`Command`] first, then dispatched with
//! a single match in the session; no substring slicing happens at dispatch
//! time. Empty input, bare `i`/`a` with no argument, and unrecognized
//! tokens all parse to `None` and are absorbed as silent no-ops.

/// One parsed editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `?` - display the command reference
    Help,
    /// `.` - toggle the cursor overlay on output
    ToggleCursor,
    /// `h` - move cursor left by one
    MoveLeft,
    /// `l` - move cursor right by one
    MoveRight,
    /// `^` - move cursor to the beginning of the line
    MoveLineStart,
    /// `$` - move cursor to the end of the line
    MoveLineEnd,
    /// `w` - move cursor to the beginning of the next word
    NextWord,
    /// `b` - move cursor to the beginning of the previous word
    PrevWord,
    /// `i<text>` - insert text before the cursor
    Insert(String),
    /// `a<text>` - append text after the cursor
    Append(String),
    /// `x` - delete the character at the cursor
    DeleteChar,
    /// `dw` - delete the word at or after the cursor
    DeleteWord,
    /// `u` - undo the previous command
    Undo,
    /// `r` - repeat the last command
    Repeat,
    /// `s` - show content
    Show,
    /// `q` - quit
    Quit,
}

impl Command {
    /// Parses a raw token. `None` means "invalid, request another token".
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            // Empty input and argument-less insert/append are incomplete.
            "" | "i" | "a" => None,
            "?" => Some(Self::Help),
            "." => Some(Self::ToggleCursor),
            "h" => Some(Self::MoveLeft),
            "l" => Some(Self::MoveRight),
            "^" => Some(Self::MoveLineStart),
            "$" => Some(Self::MoveLineEnd),
            "w" => Some(Self::NextWord),
            "b" => Some(Self::PrevWord),
            "x" => Some(Self::DeleteChar),
            "dw" => Some(Self::DeleteWord),
            "u" => Some(Self::Undo),
            "r" => Some(Self::Repeat),
            "s" => Some(Self::Show),
            "q" => Some(Self::Quit),
            _ => match token.chars().next()? {
                'i' => Some(Self::Insert(token[1..].to_string())),
                'a' => Some(Self::Append(token[1..].to_string())),
                _ => None,
            },
        }
    }
}

/// Meta-commands are excluded from history recording and from repeat-target
/// selection.
pub fn is_meta(token: &str) -> bool {
    matches!(token, "?" | "r" | "s" | "u")
}

/// Tokens `repeat` is allowed to re-dispatch: insert/append by token class,
/// or an exact member of the replayable set.
pub fn is_replayable(token: &str) -> bool {
    token.starts_with('i')
        || token.starts_with('a')
        || matches!(token, "." | "h" | "l" | "^" | "$" | "w" | "b" | "x" | "dw" | "s")
}

/// The `?` command reference, one command per line.
pub fn help_text() -> &'static str {
    "? - display this help info\n\
     . - toggle row cursor on and off\n\
     h - move cursor left\n\
     l - move cursor right\n\
     ^ - move cursor to beginning of the line\n\
     $ - move cursor to end of the line\n\
     w - move cursor to beginning of next word\n\
     b - move cursor to beginning of previous word\n\
     i - insert <text> before cursor\n\
     a - append <text> after cursor\n\
     x - delete character at cursor\n\
     dw - delete word and trailing spaces at cursor\n\
     u - undo previous command\n\
     r - repeat last command\n\
     s - show content\n\
     q - quit program"
}
