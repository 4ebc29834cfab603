use core::mem::size_of;

use crate::error::{check_word, Error, Result};
use crate::{Information, WordList};

/// Sorted array of words, queried by binary search.
#[derive(Debug, Default)]
pub struct ArrayWordList {
    /// Words of the phase being built, unsorted and with duplicates.
    pending: Option<Vec<Box<[u8]>>>,

    /// Sorted by bytes, without duplicates.
    words: Vec<Box<[u8]>>
}

impl WordList for ArrayWordList {
    fn begin(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::AlreadyInBuildPhase);
        }

        self.pending = Some(Vec::new());
        Ok(())
    }

    fn insert(&mut self, word: &[u8]) -> Result<()> {
        let pending = self.pending.as_mut().ok_or(Error::NotInBuildPhase)?;
        check_word(word)?;

        pending.push(word.into());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let mut words = self.pending.take().ok_or(Error::NotInBuildPhase)?;

        // Sorting once is much faster than keeping the array sorted on each insertion.
        words.sort_unstable();
        words.dedup();

        self.words = words;
        Ok(())
    }

    fn contains(&self, word: &[u8]) -> bool {
        self.words
            .binary_search_by(|stored| stored[..].cmp(word))
            .is_ok()
    }
}

impl Information for ArrayWordList {
    fn words(&self) -> usize {
        self.words.len()
    }

    fn size_in_bytes(&self) -> usize {
        self.words.capacity() * size_of::<Box<[u8]>>()
            + self.words.iter().map(|word| word.len()).sum::<usize>()
    }
}
