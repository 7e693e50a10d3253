use super::environment::EnvironmentHandler;
use super::LoopAction;
use crate::core::commands::CommandError;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, command: &str) -> Result<LoopAction, ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_command(&mut self, command: &str) -> Result<LoopAction, ShellError> {
        // Skip empty commands early
        if command.trim().is_empty() {
            return Ok(LoopAction::Continue);
        }

        // Expand variable references against the store before parsing
        let expanded_command = self.expand_env_vars(command);
        let args: Vec<&str> = expanded_command.split_whitespace().collect();
        if args.is_empty() {
            return Ok(LoopAction::Continue);
        }

        let command_name = args[0];
        if command_name == "exit" {
            return Ok(LoopAction::Exit);
        }

        let command_args: Vec<String> = args[1..].iter().map(|&s| s.to_string()).collect();

        // Builtins and externals alike leave the loop running; the
        // diagnostics below are the whole error surface.
        match self.executor.execute(&mut self.store, command_name, &command_args) {
            Ok(()) => {}
            Err(CommandError::NotFound(cmd)) => self.reporter.command_not_found(&cmd),
            Err(CommandError::CdFailed(target)) => self.reporter.cd_failed(&target),
            Err(e) => {
                if !self.flags.is_set("quiet") {
                    eprintln!("{}", e);
                }
            }
        }

        Ok(LoopAction::Continue)
    }
}
