use crate::core::env::EnvStore;

pub(crate) trait EnvironmentHandler {
    fn expand_env_vars(&self, input: &str) -> String;
}

impl EnvironmentHandler for super::Shell {
    fn expand_env_vars(&self, input: &str) -> String {
        expand_vars(&self.store, input)
    }
}

/// Replaces each `$NAME` with its value from the store, or the empty
/// string when the name is absent. A bare `$` is left alone. Single
/// pass; values are not re-expanded.
pub(crate) fn expand_vars(store: &EnvStore, input: &str) -> String {
    let mut result = input.to_string();
    let mut search_from = 0;

    while let Some(rel_pos) = result[search_from..].find('$') {
        let dollar_pos = search_from + rel_pos;
        if dollar_pos + 1 >= result.len() {
            break;
        }

        let var_end = result[dollar_pos + 1..]
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .map_or(result.len(), |pos| pos + dollar_pos + 1);

        let var_name = &result[dollar_pos + 1..var_end];
        if var_name.is_empty() {
            search_from = dollar_pos + 1;
            continue;
        }

        let replacement = store.lookup(var_name).unwrap_or("").to_string();
        result.replace_range(dollar_pos..var_end, &replacement);
        search_from = dollar_pos + replacement.len();
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> EnvStore {
        let mut store = EnvStore::new();
        store
            .init_from(vec![
                ("HOME".to_string(), "/home/test".to_string()),
                ("GREETING".to_string(), "hello".to_string()),
            ])
            .unwrap();
        store
    }

    #[test]
    fn test_expand_known_var() {
        assert_eq!(expand_vars(&store(), "echo $GREETING"), "echo hello");
    }

    #[test]
    fn test_expand_in_the_middle() {
        assert_eq!(expand_vars(&store(), "cd $HOME/bin"), "cd /home/test/bin");
    }

    #[test]
    fn test_absent_var_expands_to_empty() {
        assert_eq!(expand_vars(&store(), "echo [$NOPE]"), "echo []");
    }

    #[test]
    fn test_bare_dollar_is_kept() {
        assert_eq!(expand_vars(&store(), "echo $ sign"), "echo $ sign");
        assert_eq!(expand_vars(&store(), "cost is 5$"), "cost is 5$");
    }

    #[test]
    fn test_value_is_not_re_expanded() {
        let mut store = store();
        store.set("LOOP", "$LOOP", true).unwrap();
        assert_eq!(expand_vars(&store, "echo $LOOP"), "echo $LOOP");
    }

    #[test]
    fn test_no_dollar_passthrough() {
        assert_eq!(expand_vars(&store(), "plain text"), "plain text");
    }
}
