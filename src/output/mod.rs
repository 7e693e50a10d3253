use std::io::{self, Write};

mod diagnostics;
mod prompt;

pub use diagnostics::Reporter;
pub use prompt::{maybe_show_prompt, show_prompt, stdin_is_interactive, PROMPT};

/// Writes a string to the given stream one byte at a time, with no internal
/// buffering. Every byte has reached the stream by the time this returns.
///
/// Returns the number of bytes written.
pub fn write_str<W: Write>(s: &str, stream: &mut W) -> io::Result<usize> {
    for byte in s.as_bytes() {
        stream.write_all(std::slice::from_ref(byte))?;
    }
    stream.flush()?;
    Ok(s.len())
}
