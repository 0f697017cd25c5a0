use crate::options::SeparatorSet;
use crate::trie::{TrieCursor, Vocabulary};
use crate::types::ConnectorMatch;

/// Connector run tracked alongside the word run during a scan.
pub(super) struct ConnectorRun<'a> {
    vocabulary: &'a Vocabulary,
    cursor: TrieCursor<'a>,
    buf: String,
    len: usize,
    start: Option<usize>,
    found: bool,
    extended: bool,
}

impl<'a> ConnectorRun<'a> {
    pub(super) fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            cursor: vocabulary.trie().cursor(),
            buf: String::new(),
            len: 0,
            start: None,
            found: false,
            extended: false,
        }
    }

    /// Offer the character at offset `i` to the connector cursor.
    pub(super) fn feed(&mut self, i: usize, c: char) -> bool {
        if !self.cursor.advance(c) {
            return false;
        }
        self.start.get_or_insert(i);
        self.buf.push(c);
        self.len += 1;
        self.found = true;
        self.extended = true;
        true
    }

    pub(super) fn is_found(&self) -> bool {
        self.found
    }

    /// Whether the last fed character extended this run.
    pub(super) fn extended(&self) -> bool {
        self.extended
    }

    pub(super) fn end_step(&mut self) {
        self.extended = false;
    }

    pub(super) fn at_leaf(&self) -> bool {
        self.cursor.at_leaf()
    }

    /// Leaf of the connector trie, or an exact connector entry.
    pub(super) fn is_complete(&self) -> bool {
        self.at_leaf() || self.vocabulary.contains(&self.buf)
    }

    pub(super) fn starts_before(&self, offset: usize) -> bool {
        self.start.is_some_and(|s| s < offset)
    }

    /// Run ends strictly before `offset`, leaving at least one character gap.
    pub(super) fn ends_before(&self, offset: usize) -> bool {
        self.start.is_some_and(|s| s + self.len < offset)
    }

    /// Snapshot the run as a match, picking up separators on both sides.
    pub(super) fn to_match(&self, text: &[char], separators: &SeparatorSet) -> Option<ConnectorMatch> {
        let start = self.start?;
        let previous_separator = start
            .checked_sub(1)
            .and_then(|p| text.get(p).copied())
            .filter(|c| separators.contains(*c));
        let following_separator = text
            .get(start + self.len)
            .copied()
            .filter(|c| separators.contains(*c));

        Some(ConnectorMatch {
            matched: self.buf.clone(),
            connector_words: self.cursor.possible_words(),
            start,
            previous_separator,
            following_separator,
        })
    }

    /// Drop the run and rewind the cursor.
    pub(super) fn clear(&mut self) {
        self.cursor.reset();
        self.buf.clear();
        self.len = 0;
        self.start = None;
        self.found = false;
    }
}
