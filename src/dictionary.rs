use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::{Result, WordList};

/// Read a word list file and iterate over its words.
///
/// A word list file contains one word per line.
/// Surrounding whitespaces are removed, so a blank line
/// is the empty word.
pub struct Dictionary<R> {
    buffer: R
}

impl Dictionary<BufReader<File>> {
    /// Create a dictionary for the given file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;

        Ok(Dictionary {
            buffer: BufReader::new(file)
        })
    }
}

impl<R: BufRead> Dictionary<R> {
    /// Create a dictionary over any buffered reader (stdin, memory...).
    pub fn new(buffer: R) -> Self {
        Dictionary { buffer }
    }
}

impl<R: BufRead> IntoIterator for Dictionary<R> {
    type Item = io::Result<String>;
    type IntoIter = DictionaryIterator<R>;

    /// Transform the dictionary into an iterator.
    fn into_iter(self) -> Self::IntoIter {
        DictionaryIterator {
            iter: self.buffer.lines()
        }
    }
}

/// An iterator over the dictionary words.
/// A line that can't be read (or isn't valid UTF-8) is an error.
pub struct DictionaryIterator<R> {
    iter: io::Lines<R>
}

impl<R: BufRead> Iterator for DictionaryIterator<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|line| line.map(|line| {
                let word = line.trim();
                if word.len() == line.len() { line } else { word.to_owned() }
            }))
    }
}

/// Fill the list with all the words read from `reader`,
/// in a single build phase. Return the number of lines read.
///
/// The build phase is closed even when a line can't be read
/// or a word is rejected: the words added before the failure
/// are kept and the first error is returned.
/// Only a failing `finish` leaves the phase open, as the list reports it.
pub fn load<L: WordList, R: BufRead>(list: &mut L, reader: R) -> Result<usize> {
    list.begin()?;

    let mut lines = 0;
    let inserted = Dictionary::new(reader)
        .into_iter()
        .try_for_each(|word| {
            lines += 1;
            list.insert(word?.as_bytes())
        });

    let finished = list.finish();
    inserted?;
    finished?;

    Ok(lines)
}

/// Same as `load`, reading from the given file.
pub fn load_path<L: WordList, P: AsRef<Path>>(list: &mut L, path: P) -> Result<usize> {
    trace!(path = %path.as_ref().display(), "loading words");

    let file = File::open(path)?;
    load(list, BufReader::new(file))
}
