use crate::packed::{EncoderLimits, PackedTrie, TrieBuilder};
use crate::{Information, Result, WordList};

/// Word list backed by the packed trie.
///
/// Words are accumulated in a `TrieBuilder`,
/// queries only ever look at the frozen array.
#[derive(Debug, Default)]
pub struct PackedWordList {
    builder: TrieBuilder,
    packed: Option<PackedTrie>,
    words: usize
}

impl PackedWordList {
    pub fn with_limits(limits: EncoderLimits) -> Self {
        PackedWordList {
            builder: TrieBuilder::with_limits(limits),
            packed: None,
            words: 0
        }
    }

    /// Change the limits used when the build phase is closed,
    /// for example to retry after an `EncodingOverflow`.
    pub fn set_limits(&mut self, limits: EncoderLimits) {
        self.builder.set_limits(limits);
    }

    /// The frozen array of the last closed build phase.
    pub fn packed(&self) -> Option<&PackedTrie> {
        self.packed.as_ref()
    }

    pub fn into_packed(self) -> Option<PackedTrie> {
        self.packed
    }
}

impl From<PackedTrie> for PackedWordList {
    /// Wrap an already built array, for example one read back from disk.
    /// The word count isn't stored in the array and is left to zero.
    fn from(packed: PackedTrie) -> Self {
        PackedWordList {
            builder: TrieBuilder::default(),
            packed: Some(packed),
            words: 0
        }
    }
}

impl WordList for PackedWordList {
    fn begin(&mut self) -> Result<()> {
        self.builder.begin()
    }

    fn insert(&mut self, word: &[u8]) -> Result<()> {
        self.builder.insert(word)
    }

    fn finish(&mut self) -> Result<()> {
        let words = self.builder.words();

        self.packed = Some(self.builder.finish()?);
        self.words = words;
        Ok(())
    }

    fn contains(&self, word: &[u8]) -> bool {
        self.packed.as_ref().map_or(false, |packed| packed.contains(word))
    }
}

impl Information for PackedWordList {
    fn words(&self) -> usize {
        self.words
    }

    fn size_in_bytes(&self) -> usize {
        self.packed.as_ref().map_or(0, PackedTrie::size_in_bytes)
    }
}
