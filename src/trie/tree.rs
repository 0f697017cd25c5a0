use std::collections::{HashMap, HashSet};

use super::cursor::TrieCursor;

/// Index of a node inside a [`WordTrie`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// One character edge. Parents own children through the arena; `parent`
/// is only followed to rebuild the path back to the root.
#[derive(Debug, Clone)]
struct TrieNode {
    ch: char,
    parent: Option<NodeId>,
    children: HashMap<char, NodeId>,
}

impl TrieNode {
    fn new(ch: char, parent: Option<NodeId>) -> Self {
        Self {
            ch,
            parent,
            children: HashMap::new(),
        }
    }
}

/// First-character node plus every vocabulary word starting with it.
#[derive(Debug, Clone)]
struct TrieRoot {
    node: NodeId,
    words: Vec<String>,
}

/// Immutable character trie over a word list.
///
/// Words sharing a prefix share the nodes for it, so the node count equals
/// the number of distinct prefixes in the vocabulary. A node without
/// children is the only marker of a complete word: a word that is a strict
/// prefix of another one never ends on a leaf.
///
/// The trie holds no scan state. Walks are driven by [`TrieCursor`] values
/// borrowed from it, so one trie can serve any number of concurrent scans.
#[derive(Debug, Clone, Default)]
pub struct WordTrie {
    nodes: Vec<TrieNode>,
    roots: HashMap<char, TrieRoot>,
}

impl WordTrie {
    /// Build a trie from a word list. Empty words and duplicates are skipped.
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        // Group by first letter up front; each root keeps its group for
        // candidate lookups.
        let mut first_letters: HashMap<char, Vec<String>> = HashMap::new();
        let mut order: Vec<char> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::with_capacity(words.len());

        for word in words {
            let word = word.as_ref();
            let Some(first) = word.chars().next() else {
                continue;
            };
            if !seen.insert(word) {
                continue;
            }
            first_letters
                .entry(first)
                .or_insert_with(|| {
                    order.push(first);
                    Vec::new()
                })
                .push(word.to_string());
        }

        let mut trie = Self {
            nodes: Vec::new(),
            roots: HashMap::with_capacity(first_letters.len()),
        };

        for first in order {
            let Some(group) = first_letters.remove(&first) else {
                continue;
            };
            let root = trie.push_node(first, None);
            for word in &group {
                let mut current = root;
                for c in word.chars().skip(1) {
                    current = trie.child_or_insert(current, c);
                }
            }
            trie.roots.insert(first, TrieRoot { node: root, words: group });
        }

        trie
    }

    fn push_node(&mut self, ch: char, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(ch, parent));
        id
    }

    fn child_or_insert(&mut self, parent: NodeId, ch: char) -> NodeId {
        if let Some(&existing) = self.nodes[parent.0].children.get(&ch) {
            return existing;
        }
        let id = self.push_node(ch, Some(parent));
        self.nodes[parent.0].children.insert(ch, id);
        id
    }

    /// Start a new walk over this trie.
    pub fn cursor(&self) -> TrieCursor<'_> {
        TrieCursor::new(self)
    }

    /// Root node for a first character.
    pub fn root(&self, ch: char) -> Option<NodeId> {
        self.roots.get(&ch).map(|r| r.node)
    }

    /// Child of `node` reached through `ch`.
    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes.get(node.0)?.children.get(&ch).copied()
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes
            .get(node.0)
            .map(|n| n.children.is_empty())
            .unwrap_or(false)
    }

    /// Character on the edge leading to `node`.
    pub fn char_of(&self, node: NodeId) -> Option<char> {
        self.nodes.get(node.0).map(|n| n.ch)
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.nodes.get(node.0).map(|n| n.children.len()).unwrap_or(0)
    }

    /// Characters from the root down to `node`, in reading order.
    pub fn path_to(&self, node: NodeId) -> String {
        let mut chars = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            let Some(n) = self.nodes.get(id.0) else {
                break;
            };
            chars.push(n.ch);
            current = n.parent;
        }
        chars.iter().rev().collect()
    }

    /// Vocabulary words that start with the path leading to `node`.
    pub fn possible_words(&self, node: NodeId) -> Vec<String> {
        let prefix = self.path_to(node);
        let Some(first) = prefix.chars().next() else {
            return Vec::new();
        };
        match self.roots.get(&first) {
            Some(root) => root
                .words
                .iter()
                .filter(|w| w.starts_with(prefix.as_str()))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Check whether `path` can be walked edge by edge from a root.
    pub fn contains_path(&self, path: &str) -> bool {
        let mut cursor = self.cursor();
        !path.is_empty() && path.chars().all(|c| cursor.advance(c))
    }

    /// Total number of nodes (distinct prefixes).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct first characters.
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
