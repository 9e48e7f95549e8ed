//! Case-insensitive dictionary trie.
//!
//! Nodes live in a single arena and refer to their children by index. Each
//! node has a direct slot per letter A-Z, so a child lookup is one array read
//! and a node can never hold two children for the same letter.

use crate::arena::{Arena, ArenaError};

/// Index of a node in the trie arena.
pub type NodeId = u32;

/// Letters a trie can branch on.
const ALPHABET: usize = 26;

/// Child slot value meaning "no child". The root is never anyone's child.
const NO_CHILD: NodeId = 0;

#[derive(Debug, Clone, Copy)]
struct TrieNode {
    terminal: bool,
    children: [NodeId; ALPHABET],
}

impl TrieNode {
    const EMPTY: Self = Self {
        terminal: false,
        children: [NO_CHILD; ALPHABET],
    };
}

/// Maps an ASCII letter of either case to its slot, or `None` for anything else.
#[inline(always)]
fn letter_slot(ch: u8) -> Option<usize> {
    let upper = ch.to_ascii_uppercase();
    upper.is_ascii_uppercase().then(|| (upper - b'A') as usize)
}

/// Set of dictionary words stored as a prefix tree.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Arena<TrieNode>,
    word_count: usize,
}

impl Trie {
    /// The root node; it holds no letter.
    pub const ROOT: NodeId = 0;

    /// Creates a trie holding no words.
    pub fn empty(node_capacity: usize) -> Result<Self, ArenaError> {
        let mut nodes = Arena::with_capacity("trie", node_capacity);
        nodes.push(TrieNode::EMPTY)?;
        Ok(Self {
            nodes,
            word_count: 0,
        })
    }

    /// Builds a trie from newline-separated words.
    ///
    /// Letters are folded to uppercase. A word containing any other byte
    /// still has its letters walked into the trie but is never marked
    /// terminal, so it cannot be found. A `\r` directly before the newline is
    /// part of the line ending, a final line without a newline still counts,
    /// and empty lines are skipped.
    pub fn build(text: &[u8], node_capacity: usize) -> Result<Self, ArenaError> {
        let mut trie = Self::empty(node_capacity)?;
        for line in text.split(|&byte| byte == b'\n') {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if !line.is_empty() {
                trie.insert(line)?;
            }
        }
        log::info!(
            "built trie with {} words in {} nodes",
            trie.word_count,
            trie.nodes.len()
        );
        trie.nodes.log_stats();
        Ok(trie)
    }

    /// Walks `word` into the trie, creating nodes as needed.
    ///
    /// Returns whether the word was marked terminal.
    pub fn insert(&mut self, word: &[u8]) -> Result<bool, ArenaError> {
        let mut node = Self::ROOT;
        let mut valid = true;

        for &ch in word {
            let Some(slot) = letter_slot(ch) else {
                valid = false;
                continue;
            };
            let child = self.nodes.get(node).children[slot];
            node = if child == NO_CHILD {
                let created = self.nodes.push(TrieNode::EMPTY)?;
                self.nodes.get_mut(node).children[slot] = created;
                created
            } else {
                child
            };
        }

        if !valid || node == Self::ROOT {
            return Ok(false);
        }
        let target = self.nodes.get_mut(node);
        if !target.terminal {
            target.terminal = true;
            self.word_count += 1;
        }
        Ok(true)
    }

    /// Returns the child of `node` for letter `ch` (either case), if any.
    #[inline(always)]
    pub fn find_child(&self, node: NodeId, ch: u8) -> Option<NodeId> {
        let slot = letter_slot(ch)?;
        let child = self.nodes.get(node).children[slot];
        (child != NO_CHILD).then_some(child)
    }

    #[inline(always)]
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes.get(node).terminal
    }

    /// Follows `word` from the root, returning the node it ends on.
    pub fn walk(&self, word: &[u8]) -> Option<NodeId> {
        word.iter()
            .try_fold(Self::ROOT, |node, &ch| self.find_child(node, ch))
    }

    /// Returns whether `word` is a dictionary word (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word.as_bytes())
            .is_some_and(|node| self.is_terminal(node))
    }

    /// Number of distinct terminal words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPACITY: usize = 1024;

    #[test]
    fn test_inserted_words_are_terminal() {
        let trie = Trie::build(b"apple\nAPPLY\nape\n", CAPACITY).unwrap();
        for word in ["APPLE", "APPLY", "APE"] {
            assert!(trie.contains(word), "{word} should be in the trie");
        }
        assert_eq!(trie.word_count(), 3);
    }

    #[test]
    fn test_prefixes_and_strangers_are_not_terminal() {
        let trie = Trie::build(b"apple\n", CAPACITY).unwrap();
        assert!(!trie.contains("APP"), "Prefix must not be a word");
        assert!(!trie.contains("APPLES"));
        assert!(!trie.contains("PEAR"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let trie = Trie::build(b"Zebra\n", CAPACITY).unwrap();
        assert!(trie.contains("zebra"));
        assert!(trie.contains("ZEBRA"));
        assert!(trie.contains("zEbRa"));
    }

    #[test]
    fn test_words_with_punctuation_are_unsearchable() {
        let trie = Trie::build(b"can't\nwell-known\ncant\n", CAPACITY).unwrap();
        assert!(trie.contains("CANT"));
        assert!(!trie.contains("WELLKNOWN"), "Hyphenated word must be excluded");
        assert_eq!(trie.word_count(), 1);
        // the letters of excluded words are still walked in
        assert!(trie.walk(b"WELLKNOWN").is_some());
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let trie = Trie::build(b"first\r\nsecond\r\n\r\nlast", CAPACITY).unwrap();
        for word in ["FIRST", "SECOND", "LAST"] {
            assert!(trie.contains(word), "{word} should be in the trie");
        }
        assert!(!trie.is_terminal(Trie::ROOT), "Empty lines must not mark the root");
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let trie = Trie::build(b"TEAM\nTEAR\nTEA\n", CAPACITY).unwrap();
        // root + T E A + M + R
        assert_eq!(trie.node_count(), 6);
        let tea = trie.walk(b"TEA").unwrap();
        assert_eq!(trie.walk(b"TE").and_then(|te| trie.find_child(te, b'A')), Some(tea));
        assert!(trie.find_child(tea, b'm').is_some());
        assert!(trie.find_child(tea, b'!').is_none());
    }

    #[test]
    fn test_duplicate_words_count_once() {
        let trie = Trie::build(b"word\nWORD\nword\n", CAPACITY).unwrap();
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn test_exhausted_arena_reports_error() {
        let err = Trie::build(b"ABCDEFGH\n", 4).unwrap_err();
        assert_eq!(err.arena, "trie");
        assert_eq!(err.capacity, 4);
    }
}
