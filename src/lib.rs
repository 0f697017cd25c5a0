//! Wordtree Finder - streaming trie matcher for names, surnames and connectors
//!
//! This library finds known vocabulary inside free-form text:
//! - Character tries shared between prefixes ("ana", "andres" share "an")
//! - Single-pass scanning with a word cursor and a connector cursor
//! - Connector words ("de", "del", "y") attached to the word that follows
//! - Candidate completions for partially matched words
//! - Canonical vocabularies plus a registry of ad-hoc named lists
//!
//! # Example
//!
//! ```rust
//! use wordtree_finder::{Completeness, TrieSelector, VocabularyStore};
//!
//! let store = VocabularyStore::new();
//! store.init(
//!     vec!["ana".into(), "luis".into()],
//!     vec!["garcia".into()],
//!     vec!["de".into(), "y".into()],
//! );
//!
//! let matches = store.scan("Luis y Ana", &TrieSelector::Names).unwrap().unwrap();
//! assert_eq!(matches.len(), 2);
//!
//! let ana = &matches[1];
//! assert_eq!(ana.matched, "ana");
//! assert_eq!(ana.completeness, Completeness::Total);
//! assert_eq!(ana.connector.as_ref().unwrap().matched, "y");
//! assert_eq!(ana.complete_string(), " y ana");
//! ```
//!
//! # Word List Syntax
//!
//! Word lists hold one entry per line:
//! ```text
//! # comment
//! ana
//! maria jose      # entries may contain spaces
//! file: more.txt  # include another list (relative to this file)
//! ```
//!
//! # Matching Rules
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `matched` | Longest run of characters accepted by the word trie |
//! | `completeness` | `Total` when the run ends on a trie leaf |
//! | `candidates` | Vocabulary words that start with the run |
//! | `in_dictionary` | The run is literally a vocabulary entry |
//! | `connector` | A finished connector ending before the word, not touching it |
//!
//! Offsets are counted in characters, not bytes.

pub mod error;
pub mod loader;
pub mod matcher;
pub mod options;
pub mod parser;
pub mod store;
pub mod trie;
pub mod types;

// Re-export commonly used items
pub use error::{FinderError, LoadErrorKind, Result};
pub use matcher::Matcher;
pub use options::{SeparatorSet, StoreOptions, DEFAULT_SEPARATORS};
pub use parser::{parse_word_list, parse_word_list_from_file};
pub use store::VocabularyStore;
pub use trie::{TrieCursor, Vocabulary, WordTrie};
pub use types::{Completeness, ConnectorMatch, MatchRecord, TrieSelector};

// Re-export loader types
#[cfg(feature = "async")]
pub use loader::AsyncWordListLoader;
pub use loader::{
    FileWordListLoader, ListKind, MemoryWordListLoader, NilWordListLoader, WordListLoader,
};
