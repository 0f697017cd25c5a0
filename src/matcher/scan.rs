use std::sync::Arc;

use tracing::trace;

use super::connector::ConnectorRun;
use super::{Matcher, FLUSH_CHAR};
use crate::options::SeparatorSet;
use crate::trie::{fold_char, TrieCursor, Vocabulary};
use crate::types::{Completeness, ConnectorMatch, MatchRecord};

pub(super) type Predicate<'p> = &'p dyn Fn(&MatchRecord) -> bool;

/// State of one pass over a text. Built fresh for every scan.
pub(super) struct Scan<'a, 'p> {
    words: &'a Vocabulary,
    separators: &'a SeparatorSet,
    text: Arc<str>,
    chars: Vec<char>,
    word: TrieCursor<'a>,
    word_buf: String,
    word_start: Option<usize>,
    connector: ConnectorRun<'a>,
    pending: Option<ConnectorMatch>,
    predicate: Option<Predicate<'p>>,
    matches: Vec<MatchRecord>,
}

impl<'a, 'p> Scan<'a, 'p> {
    pub(super) fn new(matcher: &Matcher<'a>, text: &str, predicate: Option<Predicate<'p>>) -> Self {
        let mut chars: Vec<char> = if matcher.fold_case {
            text.chars().map(fold_char).collect()
        } else {
            text.chars().collect()
        };
        chars.push(FLUSH_CHAR);

        Self {
            words: matcher.words,
            separators: matcher.separators,
            text: Arc::from(text),
            chars,
            word: matcher.words.trie().cursor(),
            word_buf: String::new(),
            word_start: None,
            connector: ConnectorRun::new(matcher.connectors),
            pending: None,
            predicate,
            matches: Vec::new(),
        }
    }

    pub(super) fn run(mut self) -> Vec<MatchRecord> {
        for i in 0..self.chars.len() {
            let c = self.chars[i];
            self.step(i, c);
        }

        // The flush character was taken into a word ("ana" + ' ' toward
        // "ana maria"); report the run without it.
        if !self.word_buf.is_empty() {
            self.word_buf.pop();
            if self.word_buf.is_empty() {
                self.reset_word();
            } else {
                self.emit_word_run(Completeness::Partial);
            }
        }

        self.matches
    }

    fn step(&mut self, i: usize, c: char) {
        self.connector.feed(i, c);

        if self.word.advance(c) {
            self.word_start.get_or_insert(i);
            self.word_buf.push(c);
        } else if !self.word_buf.is_empty() {
            self.end_word_run();
        }

        self.track_connector();
        self.connector.end_step();
    }

    /// The word cursor rejected a character: emit the run collected so far.
    fn end_word_run(&mut self) {
        let completeness = if self.word.at_leaf() {
            Completeness::Total
        } else {
            Completeness::Partial
        };
        self.emit_word_run(completeness);
    }

    fn emit_word_run(&mut self, completeness: Completeness) {
        let word_start = self.word_start.unwrap_or(0);

        if self.connector.is_found() && self.connector.starts_before(word_start) {
            if self.connector.is_complete() && self.connector.ends_before(word_start) {
                self.pending = self.connector.to_match(&self.chars, self.separators);
            }
            self.connector.clear();
        }

        let record = MatchRecord {
            in_dictionary: self.words.contains(&self.word_buf),
            matched: std::mem::take(&mut self.word_buf),
            text: Arc::clone(&self.text),
            candidates: self.word.possible_words(),
            completeness,
            start: word_start,
            connector: self.pending.clone(),
        };

        let accepted = self.predicate.map_or(true, |p| p(&record));
        trace!(
            matched = %record.matched,
            start = record.start,
            ?completeness,
            connector = record.connector.is_some(),
            accepted,
            "word run ended"
        );
        if accepted {
            self.matches.push(record);
            self.pending = None;
        }

        self.reset_word();
    }

    fn reset_word(&mut self) {
        self.word.reset();
        self.word_buf.clear();
        self.word_start = None;
    }

    /// Keep a finished connector ready for the next word, or drop a broken run.
    fn track_connector(&mut self) {
        if !self.connector.is_found() {
            return;
        }

        let ready = self.connector.at_leaf()
            && match self.word_start {
                None => true,
                Some(word_start) => self.connector.ends_before(word_start),
            };

        if ready {
            self.pending = self.connector.to_match(&self.chars, self.separators);
        } else if !self.connector.extended() {
            self.connector.clear();
            self.pending = None;
        }
    }
}
