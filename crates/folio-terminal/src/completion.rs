//! Tab completion of command names

use serde::Serialize;
use crate::command::COMMANDS;

/// Outcome of completing a partial command name
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Completion {
    /// Exactly one match; the input line becomes this
    Replace(String),
    /// Several matches, in table order; the input line is left alone
    Candidates(Vec<String>),
    /// Nothing matched
    NoMatch,
}

/// Prefix-match `partial` (case-insensitive) against the command table
pub fn complete(partial: &str) -> Completion {
    let prefix = partial.to_lowercase();
    let mut matches: Vec<String> = COMMANDS
        .iter()
        .map(|c| c.name())
        .filter(|name| name.starts_with(&prefix))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => Completion::NoMatch,
        1 => Completion::Replace(matches.remove(0)),
        _ => Completion::Candidates(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_prefix() {
        assert_eq!(complete("neo"), Completion::Replace("neofetch".to_string()));
        assert_eq!(complete("WHO"), Completion::Replace("whoami".to_string()));
    }

    #[test]
    fn test_ambiguous_prefix_in_table_order() {
        assert_eq!(
            complete("c"),
            Completion::Candidates(vec!["contact".to_string(), "clear".to_string()])
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(complete("zz"), Completion::NoMatch);
    }

    #[test]
    fn test_empty_lists_everything() {
        match complete("") {
            Completion::Candidates(all) => assert_eq!(all.len(), 18),
            other => panic!("unexpected {:?}", other),
        }
    }
}
