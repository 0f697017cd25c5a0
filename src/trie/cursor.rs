use super::tree::{NodeId, WordTrie};

/// A single linear walk over a [`WordTrie`].
///
/// Cursors are cheap values borrowed from an immutable trie; each scan
/// allocates its own. Once the cursor sits on a leaf it refuses every
/// further character until [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct TrieCursor<'a> {
    trie: &'a WordTrie,
    current: Option<NodeId>,
    depth: usize,
}

impl<'a> TrieCursor<'a> {
    pub fn new(trie: &'a WordTrie) -> Self {
        Self {
            trie,
            current: None,
            depth: 0,
        }
    }

    /// Try to extend the walk by `c`. The cursor is left untouched on failure.
    pub fn advance(&mut self, c: char) -> bool {
        if self.at_leaf() {
            return false;
        }

        let next = match self.current {
            None => self.trie.root(c),
            Some(node) => self.trie.child(node, c),
        };

        match next {
            Some(node) => {
                self.current = Some(node);
                self.depth += 1;
                true
            }
            None => false,
        }
    }

    /// Go back to depth 0 with no current node.
    pub fn reset(&mut self) {
        self.current = None;
        self.depth = 0;
    }

    /// Whether the walk ended on a node with no children.
    pub fn at_leaf(&self) -> bool {
        self.current.map(|n| self.trie.is_leaf(n)).unwrap_or(false)
    }

    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn trie(&self) -> &'a WordTrie {
        self.trie
    }

    /// Characters consumed so far, rebuilt from the trie.
    pub fn matched_prefix(&self) -> String {
        self.current
            .map(|n| self.trie.path_to(n))
            .unwrap_or_default()
    }

    /// Vocabulary words the current walk could still complete to.
    pub fn possible_words(&self) -> Vec<String> {
        self.current
            .map(|n| self.trie.possible_words(n))
            .unwrap_or_default()
    }
}
