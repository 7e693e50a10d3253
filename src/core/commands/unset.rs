use super::{Command, CommandError};
use crate::core::env::EnvStore;

#[derive(Clone, Default)]
pub struct UnsetCommand;

impl UnsetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetCommand {
    fn execute(&self, store: &mut EnvStore, args: &[String]) -> Result<(), CommandError> {
        if args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "Unset syntax: unset NAME".into(),
            ));
        }

        // Removing a name that was never set is still a success.
        for name in args {
            store.unset(name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(names: &[&str]) -> EnvStore {
        let mut store = EnvStore::new();
        store
            .init_from(
                names
                    .iter()
                    .map(|n| ((*n).to_string(), "x".to_string())),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_unset_existing() {
        let cmd = UnsetCommand::new();
        let mut store = store_with(&["A", "B"]);
        cmd.execute(&mut store, &["A".to_string()]).unwrap();
        assert_eq!(store.lookup("A"), None);
        assert_eq!(store.lookup("B"), Some("x"));
    }

    #[test]
    fn test_unset_missing_succeeds() {
        let cmd = UnsetCommand::new();
        let mut store = store_with(&["A"]);
        cmd.execute(&mut store, &["NOPE".to_string()]).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unset_multiple_names() {
        let cmd = UnsetCommand::new();
        let mut store = store_with(&["A", "B", "C"]);
        cmd.execute(&mut store, &["A".to_string(), "C".to_string()])
            .unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.lookup("B"), Some("x"));
    }

    #[test]
    fn test_unset_requires_a_name() {
        let cmd = UnsetCommand::new();
        let mut store = store_with(&[]);
        assert!(cmd.execute(&mut store, &[]).is_err());
    }
}
