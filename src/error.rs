use thiserror::Error;

/// Everything that can go wrong while building, freezing,
/// loading or persisting a word list.
///
/// Querying never fails: `contains` answers `false`
/// for anything it can't make sense of.
#[derive(Debug, Error)]
pub enum Error {
    /// `insert` or `finish` was called without an open build phase.
    #[error("no build phase is open")]
    NotInBuildPhase,

    /// `begin` was called while a build phase is still open.
    #[error("a build phase is already open")]
    AlreadyInBuildPhase,

    /// A sibling group would be placed further than the
    /// offset field (or the configured limit) can express.
    #[error("encoded offset {offset} exceeds the limit of {limit} records")]
    EncodingOverflow { offset: usize, limit: u32 },

    /// The word contains a zero byte, which is reserved
    /// as the end of word marker.
    #[error("word contains a zero byte at position {position}")]
    InvalidWord { position: usize },

    /// A persisted packed array can't be read back.
    #[error("corrupt packed array: {0}")]
    CorruptArray(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Reject words that contains the reserved zero byte.
pub(crate) fn check_word(word: &[u8]) -> Result<()> {
    match word.iter().position(|&byte| byte == 0) {
        Some(position) => Err(Error::InvalidWord { position }),
        None => Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_word_positions() {
        assert!(check_word(b"").is_ok());
        assert!(check_word(b"hello").is_ok());

        match check_word(b"ab\0c") {
            Err(Error::InvalidWord { position }) => assert_eq!(2, position),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn messages() {
        let error = Error::EncodingOverflow { offset: 9, limit: 8 };
        assert_eq!("encoded offset 9 exceeds the limit of 8 records", error.to_string());
        assert_eq!("no build phase is open", Error::NotInBuildPhase.to_string());
    }
}
