//! The blocking prompt loop around the engine.
//!
//! One command per line: print the prompt, read a token, dispatch it, print
//! whatever the engine asks to render. `Reprompt` loops silently; EOF on
//! input ends the session like `q`.

use std::io::{self, BufRead, Write};
use strand::{DispatchResult, EditorSession};

/// Runs the session to completion over the given input/output.
pub fn run<R, W>(
    session: &mut EditorSession,
    prompt: &str,
    input: R,
    mut output: W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            tracing::debug!("input closed, ending session");
            break;
        };

        match session.dispatch(&line?) {
            DispatchResult::Render(text) => writeln!(output, "{text}")?,
            DispatchResult::Reprompt => {}
            DispatchResult::Terminate => break,
        }
    }
    Ok(())
}
