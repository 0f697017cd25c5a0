//! Store options.
//!
//! Options can be built in code or read from JSON:
//!
//! ```
//! use wordtree_finder::StoreOptions;
//!
//! let options = StoreOptions::from_json(r#"{ "separators": " -", "fold_case": false }"#).unwrap();
//! assert!(options.separators.contains('-'));
//! assert!(!options.separators.contains('.'));
//! assert!(!options.fold_case);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{FinderError, Result};

/// Default separator characters: `.`, `/`, space, `-`, `_`, `,`, `;`
pub const DEFAULT_SEPARATORS: &str = "./ -_,;";

/// Characters that may surround a connector word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SeparatorSet(Vec<char>);

impl SeparatorSet {
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut set: Vec<char> = Vec::new();
        for c in chars {
            if !set.contains(&c) {
                set.push(c);
            }
        }
        Self(set)
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from(DEFAULT_SEPARATORS)
    }
}

impl From<&str> for SeparatorSet {
    fn from(s: &str) -> Self {
        Self::new(s.chars())
    }
}

impl From<String> for SeparatorSet {
    fn from(s: String) -> Self {
        Self::new(s.chars())
    }
}

impl From<SeparatorSet> for String {
    fn from(set: SeparatorSet) -> Self {
        set.0.into_iter().collect()
    }
}

/// Vocabulary store options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    /// Separators reported around connector matches
    pub separators: SeparatorSet,
    /// Lowercase word lists and scanned text
    pub fold_case: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            separators: SeparatorSet::default(),
            fold_case: true,
        }
    }
}

impl StoreOptions {
    /// Create new store options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator characters.
    pub fn with_separators(mut self, separators: impl Into<SeparatorSet>) -> Self {
        self.separators = separators.into();
        self
    }

    /// Enable or disable case folding.
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Parse options from a JSON document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| FinderError::ConfigError(format!("Invalid store options: {}", e)))
    }
}
