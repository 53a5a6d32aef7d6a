//! Command-driven single-line text editing engine.
//!
//! The engine is a synchronous state machine: an [`EditorSession`] owns the
//! line under edit, the cursor, the display overlay flag, and the undo
//! history, and consumes one command token per [`EditorSession::dispatch`]
//! call. The prompt loop, help display, and process exit live in the
//! `strand_bin` front end; this crate only returns [`DispatchResult`]s for
//! that loop to interpret.
//!
//! ```
//! use strand::{DispatchResult, EditorSession};
//!
//! let mut session = EditorSession::new();
//! session.dispatch("ihello");
//! assert_eq!(session.content(), "hello");
//! assert_eq!(session.cursor(), 4);
//! assert_eq!(session.dispatch("q"), DispatchResult::Terminate);
//! ```

pub mod buffer;
pub mod command;
pub mod config;
pub mod error;
pub mod history;
pub mod marker;
pub mod session;
pub mod word;

pub use buffer::LineBuffer;
pub use command::Command;
pub use config::Config;
pub use error::{Error, Result};
pub use history::{History, HistoryEntry};
pub use marker::Marker;
pub use session::{DispatchResult, EditorSession};
