use super::write_str;
use std::io::{self, Write};

/// Emits shell-style error lines on behalf of builtins and the command
/// dispatcher. Write failures on the error stream are swallowed; a
/// diagnostic that cannot be printed is not itself an error the loop
/// should stop for.
#[derive(Debug, Clone)]
pub struct Reporter {
    shell_name: String,
}

impl Reporter {
    pub fn new(shell_name: impl Into<String>) -> Self {
        Self {
            shell_name: shell_name.into(),
        }
    }

    /// Emits `"<shell_name>: 1: <command><message>"` to the stream,
    /// byte-for-byte. No newline is added; callers include one in
    /// `message` when they want it.
    pub fn command_error<W: Write>(&self, command: &str, message: &str, stream: &mut W) {
        let _ = write_str(&self.shell_name, stream);
        let _ = write_str(": 1: ", stream);
        let _ = write_str(command, stream);
        let _ = write_str(message, stream);
    }

    /// Emits `"<shell_name>: 1: <command>: can't cd to <target>\n"`.
    pub fn cd_error<W: Write>(&self, command: &str, target: &str, stream: &mut W) {
        let _ = write_str(&self.shell_name, stream);
        let _ = write_str(": 1: ", stream);
        let _ = write_str(command, stream);
        let _ = write_str(": can't cd to ", stream);
        let _ = write_str(target, stream);
        let _ = write_str("\n", stream);
    }

    pub fn command_not_found(&self, command: &str) {
        self.command_error(command, ": not found\n", &mut io::stderr());
    }

    pub fn cd_failed(&self, target: &str) {
        self.cd_error("cd", target, &mut io::stderr());
    }
}
