use std::sync::Arc;

use serde::Serialize;

/// Whether a word run ended on a complete dictionary branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Completeness {
    /// Run stopped before reaching a leaf
    Partial,
    /// Run ended on a leaf of the trie
    Total,
}

/// Which vocabulary a scan walks the text against
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TrieSelector {
    Names,
    Surnames,
    /// Ad-hoc list registered in the store under this key
    Custom(String),
}

impl TrieSelector {
    pub fn custom(key: impl Into<String>) -> Self {
        TrieSelector::Custom(key.into())
    }
}

/// Connector word found right before a matched word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectorMatch {
    /// Matched connector text
    pub matched: String,
    /// Connector dictionary entries the run could complete to
    pub connector_words: Vec<String>,
    /// Character offset of the first connector character
    pub start: usize,
    /// Separator right before the connector, if any
    pub previous_separator: Option<char>,
    /// Separator right after the connector, if any
    pub following_separator: Option<char>,
}

impl ConnectorMatch {
    /// Connector surrounded by its separators, e.g. `" de "`.
    pub fn complete_string(&self) -> String {
        let mut s = String::with_capacity(self.matched.len() + 2);
        if let Some(c) = self.previous_separator {
            s.push(c);
        }
        s.push_str(&self.matched);
        if let Some(c) = self.following_separator {
            s.push(c);
        }
        s
    }

    /// Offset one past the last connector character.
    pub fn end(&self) -> usize {
        self.start + self.matched.chars().count()
    }
}

/// A completed word run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    /// Matched text as walked through the trie
    pub matched: String,
    /// Full text the scan ran over
    pub text: Arc<str>,
    /// Dictionary words that start with the matched text
    pub candidates: Vec<String>,
    pub completeness: Completeness,
    /// Character offset of the first matched character
    pub start: usize,
    /// Connector attached to this word
    pub connector: Option<ConnectorMatch>,
    /// Whether `matched` is itself a dictionary entry
    pub in_dictionary: bool,
}

impl MatchRecord {
    pub fn is_total(&self) -> bool {
        self.completeness == Completeness::Total
    }

    /// Offset one past the last matched character.
    pub fn end(&self) -> usize {
        self.start + self.matched.chars().count()
    }

    /// Connector (with separators) followed by the matched word.
    pub fn complete_string(&self) -> String {
        match &self.connector {
            Some(connector) => format!("{}{}", connector.complete_string(), self.matched),
            None => self.matched.clone(),
        }
    }
}
