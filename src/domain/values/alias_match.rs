use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How sentence-level extraction looks for known coin aliases.
///
/// `Substring` finds an alias anywhere in the message, so short tickers can
/// fire inside unrelated words ("op" in "shopping"). `WordBoundary` only
/// accepts whole-word hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasMatch {
    #[default]
    Substring,
    WordBoundary,
}

impl AliasMatch {
    pub fn matches(&self, haystack: &str, alias: &str) -> bool {
        match self {
            AliasMatch::Substring => haystack.contains(alias),
            AliasMatch::WordBoundary => haystack.match_indices(alias).any(|(idx, _)| {
                let before = haystack[..idx].chars().next_back();
                let after = haystack[idx + alias.len()..].chars().next();
                !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
            }),
        }
    }
}

impl fmt::Display for AliasMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasMatch::Substring => write!(f, "substring"),
            AliasMatch::WordBoundary => write!(f, "word_boundary"),
        }
    }
}

impl FromStr for AliasMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "substring" => Ok(AliasMatch::Substring),
            "word_boundary" | "word" => Ok(AliasMatch::WordBoundary),
            _ => Err(format!("Unknown alias match strategy: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_fires_inside_words() {
        assert!(AliasMatch::Substring.matches("going shopping", "op"));
    }

    #[test]
    fn test_word_boundary_needs_whole_word() {
        assert!(!AliasMatch::WordBoundary.matches("going shopping", "op"));
        assert!(AliasMatch::WordBoundary.matches("is op a buy?", "op"));
        assert!(AliasMatch::WordBoundary.matches("shiba inu", "shiba inu"));
    }

    #[test]
    fn test_parse_strategy() {
        assert_eq!("word-boundary".parse::<AliasMatch>().unwrap(), AliasMatch::WordBoundary);
        assert_eq!("SUBSTRING".parse::<AliasMatch>().unwrap(), AliasMatch::Substring);
    }
}
