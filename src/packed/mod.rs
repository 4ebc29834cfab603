//! The packed trie: all the words are stored in a single
//! array of `u32` records, queried without any allocation.
//!
//! A record is a link from a node (a prefix) to another one.
//! All the links going out of a node are stored consecutively
//! (a sibling group), sorted by byte, the last one flagged.
//! The group of the root is always at index 0.
//!
//! The array is built once by a `TrieBuilder` and never mutated afterward.
//! Its persisted form is the array itself, each record as a little endian
//! `u32`, without any header.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::trace;

use crate::error::{Error, Result};

pub mod builder;
pub mod encoder;
pub mod record;
pub mod searcher;

pub use builder::TrieBuilder;
pub use encoder::EncoderLimits;
pub use record::Record;

use record::MAX_OFFSET;

const RECORD_SIZE: usize = core::mem::size_of::<Record>();

/// The frozen, read only trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedTrie {
    records: Vec<Record>
}

impl PackedTrie {
    pub(crate) fn from_records(records: Vec<Record>) -> Self {
        PackedTrie { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.records.len() * RECORD_SIZE
    }

    pub fn contains(&self, word: &[u8]) -> bool {
        searcher::contains(&self.records, word)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_in_bytes());

        for record in &self.records {
            bytes.extend_from_slice(&record.to_le_bytes());
        }

        bytes
    }

    /// Read back an array written by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % RECORD_SIZE != 0 {
            return Err(Error::CorruptArray(format!(
                "size ({}) is not a multiple of {}", bytes.len(), RECORD_SIZE
            )));
        }

        let count = bytes.len() / RECORD_SIZE;
        if count > MAX_OFFSET as usize {
            return Err(Error::CorruptArray(format!(
                "{} records, at most {} can be addressed", count, MAX_OFFSET
            )));
        }

        let records = bytes
            .chunks_exact(RECORD_SIZE)
            .map(|chunk| Record::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(PackedTrie { records })
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()?;
        Ok(())
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes)
    }

    /// Save the records to the given file, replacing it if it exists.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        trace!(path = %path.as_ref().display(), records = self.len(), "saving packed trie");
        self.write_to(BufWriter::new(File::create(path)?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        trace!(path = %path.as_ref().display(), "opening packed trie");
        Self::read_from(BufReader::new(File::open(path)?))
    }
}
