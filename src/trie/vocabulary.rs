use std::collections::HashSet;

use super::fold_char;
use super::tree::WordTrie;

/// A word list together with its trie and an exact-membership index.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashSet<String>,
    trie: WordTrie,
}

impl Vocabulary {
    /// Build a case-folded vocabulary.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(words, true)
    }

    /// Build a vocabulary, lowercasing words when `fold_case` is set.
    /// Empty words are dropped; order is preserved.
    pub fn build<I, S>(words: I, fold_case: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .map(|w| {
                if fold_case {
                    w.chars().map(fold_char).collect()
                } else {
                    w
                }
            })
            .collect();

        let index = words.iter().cloned().collect();
        let trie = WordTrie::new(&words);

        Self { words, index, trie }
    }

    /// Whether `word` is literally one of the vocabulary entries.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
