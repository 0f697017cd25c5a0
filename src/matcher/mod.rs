//! Streaming vocabulary matcher.
//!
//! Walks a text once, character by character, feeding every character to
//! two trie cursors at the same time:
//! - a word cursor over the selected vocabulary (names, surnames, or an
//!   ad-hoc list)
//! - a connector cursor over the connector vocabulary ("de", "del", ...)
//!
//! A word run ends when the word cursor rejects a character; it is then
//! emitted as a [`MatchRecord`]. A connector that finished before the word
//! started, separated from it by at least one character, is attached to the
//! record as its preceding [`ConnectorMatch`](crate::types::ConnectorMatch).
//!
//! ## Example
//!
//! ```
//! use wordtree_finder::matcher::Matcher;
//! use wordtree_finder::trie::Vocabulary;
//! use wordtree_finder::{Completeness, SeparatorSet};
//!
//! let names = Vocabulary::new(["ana"]);
//! let connectors = Vocabulary::new(["de"]);
//! let separators = SeparatorSet::default();
//!
//! let matcher = Matcher::new(&names, &connectors, &separators);
//! let matches = matcher.scan("de ana").unwrap();
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].matched, "ana");
//! assert_eq!(matches[0].completeness, Completeness::Total);
//! assert_eq!(matches[0].connector.as_ref().unwrap().matched, "de");
//! ```

mod connector;
mod scan;

use crate::options::SeparatorSet;
use crate::trie::Vocabulary;
use crate::types::MatchRecord;

use scan::Scan;

/// Appended to every scanned text so the last word run is flushed.
pub(crate) const FLUSH_CHAR: char = ' ';

/// Matches a text against a word vocabulary and the connector vocabulary.
///
/// Holds only shared references; every call to [`scan`](Self::scan) walks
/// with its own cursors, so one matcher can be used from many threads.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    words: &'a Vocabulary,
    connectors: &'a Vocabulary,
    separators: &'a SeparatorSet,
    fold_case: bool,
}

impl<'a> Matcher<'a> {
    pub fn new(
        words: &'a Vocabulary,
        connectors: &'a Vocabulary,
        separators: &'a SeparatorSet,
    ) -> Self {
        Self {
            words,
            connectors,
            separators,
            fold_case: true,
        }
    }

    /// Lowercase the scanned text before walking it (default: on).
    pub fn with_fold_case(mut self, fold_case: bool) -> Self {
        self.fold_case = fold_case;
        self
    }

    /// Scan `text`, returning `None` when nothing matched.
    pub fn scan(&self, text: &str) -> Option<Vec<MatchRecord>> {
        self.run(text, None)
    }

    /// Scan `text`, keeping only records accepted by `predicate`.
    ///
    /// A connector attached to a rejected record stays pending and can
    /// attach to the next word instead.
    pub fn scan_filtered<F>(&self, text: &str, predicate: F) -> Option<Vec<MatchRecord>>
    where
        F: Fn(&MatchRecord) -> bool,
    {
        self.run(text, Some(&predicate))
    }

    pub(crate) fn run(
        &self,
        text: &str,
        predicate: Option<&dyn Fn(&MatchRecord) -> bool>,
    ) -> Option<Vec<MatchRecord>> {
        let matches = Scan::new(self, text, predicate).run();
        if matches.is_empty() {
            None
        } else {
            Some(matches)
        }
    }
}
