use core::mem::size_of;
use std::collections::HashSet;

use crate::error::{check_word, Error, Result};
use crate::{Information, WordList};

/// Hash set of words.
#[derive(Debug, Default)]
pub struct SetWordList {
    pending: Option<HashSet<Box<[u8]>>>,
    words: HashSet<Box<[u8]>>
}

impl WordList for SetWordList {
    fn begin(&mut self) -> Result<()> {
        if self.pending.is_some() {
            return Err(Error::AlreadyInBuildPhase);
        }

        self.pending = Some(HashSet::new());
        Ok(())
    }

    fn insert(&mut self, word: &[u8]) -> Result<()> {
        let pending = self.pending.as_mut().ok_or(Error::NotInBuildPhase)?;
        check_word(word)?;

        if !pending.contains(word) {
            pending.insert(word.into());
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.words = self.pending.take().ok_or(Error::NotInBuildPhase)?;
        Ok(())
    }

    fn contains(&self, word: &[u8]) -> bool {
        self.words.contains(word)
    }
}

impl Information for SetWordList {
    fn words(&self) -> usize {
        self.words.len()
    }

    // Ignores the control bytes of the table.
    fn size_in_bytes(&self) -> usize {
        self.words.capacity() * size_of::<Box<[u8]>>()
            + self.words.iter().map(|word| word.len()).sum::<usize>()
    }
}
