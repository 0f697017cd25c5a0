//! Character trie used to walk vocabularies one character at a time.
//!
//! - [`WordTrie`]: immutable arena of nodes with shared prefixes
//! - [`TrieCursor`]: per-scan walk state (current node + depth)
//! - [`Vocabulary`]: word list + trie + exact-membership index
//!
//! ## Example
//!
//! ```
//! use wordtree_finder::trie::WordTrie;
//!
//! let trie = WordTrie::new(&["ana", "ano", "andres"]);
//! let mut cursor = trie.cursor();
//!
//! assert!(cursor.advance('a'));
//! assert!(cursor.advance('n'));
//! assert_eq!(cursor.possible_words(), vec!["ana", "ano", "andres"]);
//! assert!(!cursor.advance('x'));
//! ```

mod cursor;
mod tree;
mod vocabulary;

pub use cursor::TrieCursor;
pub use tree::{NodeId, WordTrie};
pub use vocabulary::Vocabulary;

/// Lowercase a character when it maps to exactly one lowercase character,
/// so folded text keeps the same character offsets as the input.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
