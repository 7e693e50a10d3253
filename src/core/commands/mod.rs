use std::collections::BTreeMap;

mod cd;
mod export;
mod printenv;
mod unset;

pub use cd::CdCommand;
pub use export::ExportCommand;
pub use printenv::PrintEnvCommand;
pub use unset::UnsetCommand;

use crate::core::env::{EnvError, EnvStore};
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    InvalidArguments(String),
    ExecutionError(String),
    CdFailed(String),
    EnvError(EnvError),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "command not found: {}", cmd),
            CommandError::InvalidArguments(msg) => write!(f, "invalid arguments: {}", msg),
            CommandError::ExecutionError(msg) => write!(f, "execution error: {}", msg),
            CommandError::CdFailed(target) => write!(f, "can't cd to {}", target),
            CommandError::EnvError(err) => write!(f, "environment error: {}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "Process error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(cmd) => CommandError::NotFound(cmd),
            other => CommandError::ProcessError(other),
        }
    }
}

/// A builtin. Every builtin operates on the one environment store, passed
/// by exclusive reference for the duration of the call.
pub trait Command {
    fn execute(&self, store: &mut EnvStore, args: &[String]) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Export(ExportCommand),
    Unset(UnsetCommand),
    PrintEnv(PrintEnvCommand),
}

impl Command for CommandType {
    fn execute(&self, store: &mut EnvStore, args: &[String]) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(store, args),
            CommandType::Export(cmd) => cmd.execute(store, args),
            CommandType::Unset(cmd) => cmd.execute(store, args),
            CommandType::PrintEnv(cmd) => cmd.execute(store, args),
        }
    }
}

#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(flags: &crate::flags::Flags) -> Result<Self, CommandError> {
        let mut executor = Self {
            commands: BTreeMap::new(),
            process_executor: ProcessExecutor::new(flags)?,
        };

        executor
            .commands
            .insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        executor
            .commands
            .insert("export".to_string(), CommandType::Export(ExportCommand::new()));
        executor
            .commands
            .insert("unset".to_string(), CommandType::Unset(UnsetCommand::new()));
        executor
            .commands
            .insert("env".to_string(), CommandType::PrintEnv(PrintEnvCommand::new()));

        Ok(executor)
    }

    /// Runs a builtin, or hands a non-builtin to the process executor with
    /// the store's entries as the child environment.
    pub fn execute(
        &self,
        store: &mut EnvStore,
        command: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            cmd.execute(store, args)
        } else {
            let mut full_args = vec![command];
            let args_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
            full_args.extend(args_refs);
            self.process_executor
                .spawn_process(store, &full_args)
                .map_err(CommandError::from)
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::Flags;

    fn setup() -> (CommandExecutor, EnvStore) {
        let executor = CommandExecutor::new(&Flags::default()).unwrap();
        let mut store = EnvStore::new();
        store
            .init_from(vec![("HOME".to_string(), "/tmp".to_string())])
            .unwrap();
        (executor, store)
    }

    #[test]
    fn test_builtins_are_registered() {
        let (executor, _) = setup();
        for name in ["cd", "export", "unset", "env"] {
            assert!(executor.is_builtin(name), "{} should be a builtin", name);
        }
        assert!(!executor.is_builtin("ls"));
    }

    #[test]
    fn test_export_then_unset_through_dispatch() {
        let (executor, mut store) = setup();

        executor
            .execute(&mut store, "export", &["GREETING=hello".to_string()])
            .unwrap();
        assert_eq!(store.lookup("GREETING"), Some("hello"));

        executor
            .execute(&mut store, "unset", &["GREETING".to_string()])
            .unwrap();
        assert_eq!(store.lookup("GREETING"), None);
    }

    #[test]
    fn test_unknown_command_maps_to_not_found() {
        let (executor, mut store) = setup();
        let result = executor.execute(&mut store, "definitely_not_a_command_1b2c", &[]);
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }
}
