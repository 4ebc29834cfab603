use super::record::{edge, is_last, offset, Record};

/// Check if the word is present in the packed records.
///
/// Never fails: an empty array, a word containing the reserved
/// zero byte, or an offset pointing outside of the array
/// all answer `false`.
pub fn contains(records: &[Record], word: &[u8]) -> bool {
    if word.contains(&0) {
        return false;
    }

    // Index of the current sibling group.
    let mut base = 0;
    let mut rest = word;

    while let Some((&byte, tail)) = rest.split_first() {
        let record = match find(records, base, byte) {
            Some(record) => record,
            None => return false
        };

        if offset(record) == 0 {
            // Nothing more is encoded past this link,
            // it's a word only if it ends here.
            return tail.is_empty();
        }

        base += offset(record) as usize;
        rest = tail;
    }

    // The end of word marker is always the first record of a group.
    records.get(base).map_or(false, |&record| edge(record) == 0)
}

/// Linear scan of the sibling group starting at `base`.
fn find(records: &[Record], base: usize, byte: u8) -> Option<Record> {
    for &record in records.get(base..)? {
        if edge(record) == byte {
            return Some(record);
        }

        if is_last(record) {
            break;
        }
    }

    None
}
