//! The read-eval-print loop.

use std::io::{BufRead, Write};

use crate::error::TasklineError;
use crate::output::Frame;
use crate::session::{Reply, Session};

const GREETING: &str = " Hello! I'm Taskline.\n What can I do for you?";

/// Run a session loop until `bye` or end of input.
///
/// One line is fully processed (parsed, validated, list mutated, response
/// written) before the next is read. Dispatch errors are reported as an
/// apology line and the loop continues; only I/O errors abort.
///
/// # Errors
///
/// Returns an error only when reading `input` or writing `output` fails.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    frame: &Frame,
) -> Result<(), TasklineError> {
    let mut session = Session::new();
    write!(output, "{}", frame.render(GREETING))?;

    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(Reply::Message(body)) => write!(output, "{}", frame.render(&body))?,
            Ok(Reply::Farewell(body)) => {
                write!(output, "{}", frame.render(&body))?;
                break;
            }
            Err(error) => write!(output, "{}", frame.render(&format!(" OOPS!!! {error}")))?,
        }
    }
    Ok(())
}
