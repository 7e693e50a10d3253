use super::write_str;
use std::io::Write;

pub const PROMPT: &str = "($) ";

/// Whether stdin is attached to a terminal, as opposed to a redirected
/// file or pipe.
pub fn stdin_is_interactive() -> bool {
    // SAFETY: isatty only inspects the descriptor, no memory is touched.
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Writes the prompt unconditionally.
pub fn show_prompt<W: Write>(stream: &mut W) {
    let _ = write_str(PROMPT, stream);
}

/// Writes the prompt only when stdin is an interactive terminal;
/// otherwise does nothing.
pub fn maybe_show_prompt<W: Write>(stream: &mut W) {
    if stdin_is_interactive() {
        show_prompt(stream);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_prompt_bytes() {
        let mut sink = Vec::new();
        show_prompt(&mut sink);
        assert_eq!(sink, b"($) ");
    }
}
