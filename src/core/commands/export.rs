use super::{Command, CommandError};
use crate::core::env::EnvStore;
use std::borrow::Cow;

#[derive(Clone, Default)]
pub struct ExportCommand;

impl ExportCommand {
    pub fn new() -> Self {
        Self
    }

    fn parse_export<'b>(
        &self,
        args: &'b [String],
    ) -> Result<(&'b str, Cow<'b, str>), CommandError> {
        let arg = args
            .first()
            .ok_or_else(|| CommandError::InvalidArguments("Export syntax: export NAME=VALUE".into()))?;

        let parts: Vec<&str> = arg.splitn(2, '=').collect();
        if parts.len() != 2 {
            return Err(CommandError::InvalidArguments(
                "Export syntax: export NAME=VALUE".into(),
            ));
        }

        let name = parts[0].trim();
        let value = parts[1].trim();

        // Remove quotes if present
        let value = if (value.starts_with('"') && value.ends_with('"') && value.len() >= 2)
            || (value.starts_with('\'') && value.ends_with('\'') && value.len() >= 2)
        {
            Cow::Owned(value[1..value.len() - 1].to_owned())
        } else {
            Cow::Borrowed(value)
        };

        if name.is_empty() {
            return Err(CommandError::InvalidArguments(
                "Variable name cannot be empty".into(),
            ));
        }

        Ok((name, value))
    }
}

impl Command for ExportCommand {
    fn execute(&self, store: &mut EnvStore, args: &[String]) -> Result<(), CommandError> {
        let (name, value) = self.parse_export(args)?;
        store.set(name, &value, true)?;
        Ok(())
    }
}
