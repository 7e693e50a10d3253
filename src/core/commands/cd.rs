use super::{Command, CommandError};
use crate::core::env::EnvStore;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, store: &mut EnvStore, args: &[String]) -> Result<(), CommandError> {
        let target = args.first().map(|s| s.as_str()).unwrap_or("~");

        let path: PathBuf = if target == "~" {
            dirs::home_dir()
                .ok_or_else(|| CommandError::ExecutionError("Home directory not found".into()))?
        } else {
            PathBuf::from(target)
        };

        env::set_current_dir(&path)
            .map_err(|_| CommandError::CdFailed(target.to_string()))?;

        // Keep PWD in step with the process working directory, as long as
        // the store is still alive to record it.
        if let Ok(cwd) = env::current_dir() {
            let _ = store.set("PWD", &cwd.to_string_lossy(), true);
        }
        Ok(())
    }
}
