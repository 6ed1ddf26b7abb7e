//! Input primitives for the menu loop
//!
//! All prompting funnels through [`line`]: write the prompt, read one line,
//! trim it. `Ok(None)` means EOF and unwinds the caller toward a clean
//! exit; it is never an error.

use std::io::{BufRead, Write};
use std::str::FromStr;

/// Prompt for one line of input. `Ok(None)` on EOF.
pub(super) fn line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> std::io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Prompt for a number until one parses.
///
/// An empty line is zero; anything unparseable re-prompts. `Ok(None)` on
/// EOF, like [`line`].
pub(super) fn number<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> std::io::Result<Option<T>>
where
    T: FromStr + Default,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(text) = line(input, output, prompt)? else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(Some(T::default()));
        }
        match text.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Invalid number, try again.")?,
        }
    }
}
