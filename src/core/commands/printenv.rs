use super::{Command, CommandError};
use crate::core::env::EnvStore;
use crate::output::write_str;
use std::io;

/// The `env` builtin: prints every entry as `NAME=VALUE`, one per line,
/// in insertion order.
#[derive(Clone, Default)]
pub struct PrintEnvCommand;

impl PrintEnvCommand {
    pub fn new() -> Self {
        Self
    }

    fn render(store: &EnvStore) -> String {
        let mut out = String::new();
        for (name, value) in store.iter() {
            out.push_str(name);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl Command for PrintEnvCommand {
    fn execute(&self, store: &mut EnvStore, _args: &[String]) -> Result<(), CommandError> {
        write_str(&Self::render(store), &mut io::stdout())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lines_in_insertion_order() {
        let mut store = EnvStore::new();
        store
            .init_from(vec![
                ("A".to_string(), "1".to_string()),
                ("B".to_string(), "two words".to_string()),
                ("C".to_string(), String::new()),
            ])
            .unwrap();

        assert_eq!(PrintEnvCommand::render(&store), "A=1\nB=two words\nC=\n");
    }

    #[test]
    fn test_render_empty_store() {
        let store = EnvStore::new();
        assert_eq!(PrintEnvCommand::render(&store), "");
    }
}
