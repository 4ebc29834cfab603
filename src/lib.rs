pub mod dictionary;
pub mod error;
pub mod list;
pub mod logging;
pub mod packed;

pub use dictionary::{load, load_path, Dictionary};
pub use error::{Error, Result};
pub use list::{ArrayWordList, NullWordList, PackedWordList, SetWordList};
pub use packed::{EncoderLimits, PackedTrie, TrieBuilder};

/// The contract shared by every word list.
///
/// A word list is filled during a build phase, opened with `begin`
/// and closed with `finish`. Each build phase produce a new list
/// that replace the previous one once closed,
/// so that various optimisation can be done when freezing it.
/// Queries are always answered from the last closed phase.
///
/// Words are raw bytes, compared byte per byte.
/// The zero byte is reserved and can't be part of a word.
pub trait WordList {
    /// Open a build phase.
    fn begin(&mut self) -> Result<()>;

    /// Add a word to the list being built.
    fn insert(&mut self, word: &[u8]) -> Result<()>;

    /// Close the build phase, no words can be added later.
    fn finish(&mut self) -> Result<()>;

    /// Check if the word is in the list.
    /// Never fails, a word that can't be in the list is just absent.
    fn contains(&self, word: &[u8]) -> bool;
}

/// Get information about a word list
/// for the benchmark report.
pub trait Information: WordList {
    /// Number of distinct words in the last closed list.
    fn words(&self) -> usize;

    /// Approximate number of bytes used to store the last closed list.
    fn size_in_bytes(&self) -> usize;
}
