use core::num::NonZeroUsize;

use tracing::debug;

use crate::error::{check_word, Error, Result};

use super::encoder::{self, EncoderLimits};
use super::PackedTrie;

/// A node of the trie while words are being added.
///
/// Nodes are stored in an arena owned by the builder.
/// A child keyed by `0` marks that the prefix leading
/// to this node is itself a word.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// The index of the node children and the byte leading to them.
    /// Unsorted, the encoder takes care of the ordering.
    /// The index is non-zero as the root node can't be referenced.
    pub(crate) children: Vec<(u8, NonZeroUsize)>
}

impl TrieNode {
    fn child(&self, byte: u8) -> Option<NonZeroUsize> {
        self.children
            .iter()
            .find(|(key, _)| *key == byte)
            .map(|(_, index)| *index)
    }
}

/// Accumulate words in a mutable trie, then freeze
/// them into a `PackedTrie`.
///
/// ```
/// use wordlist::TrieBuilder;
///
/// let mut builder = TrieBuilder::new();
/// builder.begin().unwrap();
/// builder.insert(b"ab").unwrap();
/// builder.insert(b"abc").unwrap();
///
/// let packed = builder.finish().unwrap();
/// assert!(packed.contains(b"ab"));
/// assert!(!packed.contains(b"a"));
/// ```
#[derive(Debug, Default)]
pub struct TrieBuilder {
    /// The node arena, only present during a build phase.
    /// The root is always at index 0.
    nodes: Option<Vec<TrieNode>>,

    /// How many distinct words have been added in the current phase.
    words: usize,

    limits: EncoderLimits
}

impl TrieBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder whose `finish` enforces the given limits.
    pub fn with_limits(limits: EncoderLimits) -> Self {
        TrieBuilder {
            nodes: None,
            words: 0,
            limits
        }
    }

    pub fn limits(&self) -> EncoderLimits {
        self.limits
    }

    /// Change the limits used by the next `finish`.
    /// Allowed during a build phase.
    pub fn set_limits(&mut self, limits: EncoderLimits) {
        self.limits = limits;
    }

    pub fn is_building(&self) -> bool {
        self.nodes.is_some()
    }

    /// Number of nodes allocated in the current build phase
    /// (end of word markers included).
    pub fn nodes(&self) -> usize {
        self.nodes.as_ref().map_or(0, Vec::len)
    }

    /// Number of distinct words added in the current build phase.
    pub fn words(&self) -> usize {
        self.words
    }

    /// Open a build phase with an empty root.
    pub fn begin(&mut self) -> Result<()> {
        if self.nodes.is_some() {
            return Err(Error::AlreadyInBuildPhase);
        }

        self.nodes = Some(vec![TrieNode::default()]);
        self.words = 0;

        debug!(limit = self.limits.max_offset(), "trie build phase opened");
        Ok(())
    }

    /// Add a word to the trie.
    /// Adding a word already present doesn't change anything.
    pub fn insert(&mut self, word: &[u8]) -> Result<()> {
        let nodes = self.nodes.as_mut().ok_or(Error::NotInBuildPhase)?;
        check_word(word)?;

        let mut node_index = 0;
        for &byte in word {
            node_index = child_or_insert(nodes, node_index, byte).0;
        }

        if child_or_insert(nodes, node_index, 0).1 {
            self.words += 1;
        }

        Ok(())
    }

    /// Close the build phase and encode all the added words.
    ///
    /// When the encoding fails the build phase stays open with all its words,
    /// so that the caller can change the limits and try again.
    pub fn finish(&mut self) -> Result<PackedTrie> {
        let nodes = self.nodes.as_mut().ok_or(Error::NotInBuildPhase)?;
        let records = encoder::encode(nodes, self.limits)?;

        let nodes = self.nodes.take().map_or(0, |nodes| nodes.len());
        let words = core::mem::replace(&mut self.words, 0);

        debug!(words, nodes, records = records.len(), "trie build phase closed");
        Ok(PackedTrie::from_records(records))
    }
}

/// Get the child of the node for the given byte,
/// adding it if absent. Also return if the child was added.
fn child_or_insert(nodes: &mut Vec<TrieNode>, node_index: usize, byte: u8) -> (usize, bool) {
    if let Some(child_index) = nodes[node_index].child(byte) {
        return (child_index.get(), false);
    }

    // Node absent, add it at the end of the arena.
    nodes.push(TrieNode::default());
    let child_index = nodes.len() - 1;

    // Never the root: the arena always contains it.
    if let Some(index) = NonZeroUsize::new(child_index) {
        nodes[node_index].children.push((byte, index));
    }

    (child_index, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases() {
        let mut builder = TrieBuilder::new();

        assert!(matches!(builder.insert(b"a"), Err(Error::NotInBuildPhase)));
        assert!(matches!(builder.finish(), Err(Error::NotInBuildPhase)));

        builder.begin().unwrap();
        assert!(builder.is_building());
        assert!(matches!(builder.begin(), Err(Error::AlreadyInBuildPhase)));

        builder.finish().unwrap();
        assert!(!builder.is_building());
        assert!(matches!(builder.finish(), Err(Error::NotInBuildPhase)));

        // A new phase can be opened once the previous one is closed.
        builder.begin().unwrap();
    }

    #[test]
    fn insert_creates_one_node_per_byte() {
        let mut builder = TrieBuilder::new();
        builder.begin().unwrap();
        assert_eq!(1, builder.nodes());

        builder.insert(b"abc").unwrap();
        // root + a + b + c + end of word marker
        assert_eq!(5, builder.nodes());

        builder.insert(b"ab").unwrap();
        // Only the end of word marker of "ab" is new.
        assert_eq!(6, builder.nodes());
        assert_eq!(2, builder.words());
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut builder = TrieBuilder::new();
        builder.begin().unwrap();

        builder.insert(b"word").unwrap();
        let nodes = builder.nodes();

        builder.insert(b"word").unwrap();
        assert_eq!(nodes, builder.nodes());
        assert_eq!(1, builder.words());
    }

    #[test]
    fn zero_byte_is_rejected_before_mutation() {
        let mut builder = TrieBuilder::new();
        builder.begin().unwrap();

        assert!(matches!(builder.insert(b"ab\0"), Err(Error::InvalidWord { position: 2 })));
        assert_eq!(1, builder.nodes());
        assert_eq!(0, builder.words());
    }

    #[test]
    fn failed_finish_keeps_the_words() {
        let mut builder = TrieBuilder::with_limits(EncoderLimits::new(1));
        builder.begin().unwrap();
        builder.insert(b"ab").unwrap();
        builder.insert(b"ba").unwrap();
        let nodes = builder.nodes();

        assert!(matches!(builder.finish(), Err(Error::EncodingOverflow { .. })));
        assert!(builder.is_building());
        assert_eq!(nodes, builder.nodes());
        assert_eq!(2, builder.words());

        // Still possible to add words, and to retry with larger limits.
        builder.insert(b"c").unwrap();
        builder.set_limits(EncoderLimits::default());

        let packed = builder.finish().unwrap();
        assert!(!builder.is_building());
        assert_eq!(0, builder.words());
        for word in [&b"ab"[..], b"ba", b"c"].iter() {
            assert!(packed.contains(word));
        }
    }

    #[test]
    fn deep_word() {
        let word = vec![b'z'; 100_000];

        let mut builder = TrieBuilder::new();
        builder.begin().unwrap();
        builder.insert(&word).unwrap();
        assert_eq!(word.len() + 2, builder.nodes());

        let packed = builder.finish().unwrap();
        assert!(packed.contains(&word));
        assert!(!packed.contains(&word[1..]));
    }
}
