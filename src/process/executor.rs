use std::process::{Command, Stdio};

use super::ProcessError;
use crate::core::env::EnvStore;
use crate::flags::Flags;

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Result<Self, ProcessError> {
        Ok(ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        })
    }

    /// Spawns an external command with inherited stdio. The child sees
    /// exactly the store's entries as its environment, nothing else.
    pub fn spawn_process(&self, store: &EnvStore, args: &[&str]) -> Result<(), ProcessError> {
        let mut command = Command::new(args[0]);
        command
            .args(&args[1..])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(store.iter());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                if e.kind() == std::io::ErrorKind::NotFound {
                    return Err(ProcessError::CommandNotFound(args[0].to_string()));
                }
                return Err(e.into());
            }
        };

        let status = child.wait()?;
        if !status.success() && !self.quiet_mode {
            println!("Process exited with status: {}", status);
        }
        Ok(())
    }
}
