use crate::error::{check_word, Error, Result};
use crate::{Information, WordList};

/// Stores nothing and never finds anything.
/// Measures the cost of the benchmark itself (reading, looping).
#[derive(Debug, Default)]
pub struct NullWordList {
    building: bool
}

impl WordList for NullWordList {
    fn begin(&mut self) -> Result<()> {
        if self.building {
            return Err(Error::AlreadyInBuildPhase);
        }

        self.building = true;
        Ok(())
    }

    fn insert(&mut self, word: &[u8]) -> Result<()> {
        if !self.building {
            return Err(Error::NotInBuildPhase);
        }

        check_word(word)
    }

    fn finish(&mut self) -> Result<()> {
        if !self.building {
            return Err(Error::NotInBuildPhase);
        }

        self.building = false;
        Ok(())
    }

    fn contains(&self, _word: &[u8]) -> bool {
        false
    }
}

impl Information for NullWordList {
    fn words(&self) -> usize {
        0
    }

    fn size_in_bytes(&self) -> usize {
        0
    }
}
