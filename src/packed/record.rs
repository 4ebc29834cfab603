//! Bit layout of a single packed record.
//!
//! ```text
//! +----+-+-----------------------+
//! |edge|L|        offset         |
//! +----+-+-----------------------+
//!  31-24 23        22-0
//! ```
//!
//! - `edge`: the byte labelling the link, zero for the end of word marker.
//! - `L`: set on the last record of a sibling group.
//! - `offset`: distance from the start of the current sibling group
//!   to the child's own group, zero when the child has nothing more to encode.

pub type Record = u32;

pub const EDGE_MASK: Record = 0xFF_00_00_00;
pub const LAST_FLAG: Record = 0x00_80_00_00;
pub const OFFSET_MASK: Record = 0x00_7F_FF_FF;

const EDGE_SHIFT: u32 = 24;

/// Largest offset that fits in a record.
pub const MAX_OFFSET: u32 = OFFSET_MASK;

#[inline]
pub fn edge(record: Record) -> u8 {
    (record >> EDGE_SHIFT) as u8
}

#[inline]
pub fn is_last(record: Record) -> bool {
    (record & LAST_FLAG) != 0
}

#[inline]
pub fn offset(record: Record) -> u32 {
    record & OFFSET_MASK
}

/// Build a record. The offset must already have been checked
/// against `MAX_OFFSET`.
#[inline]
pub fn pack(edge: u8, last: bool, offset: u32) -> Record {
    debug_assert!(offset <= MAX_OFFSET);

    (Record::from(edge) << EDGE_SHIFT) | if last { LAST_FLAG } else { 0 } | (offset & OFFSET_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields() {
        let record = pack(b'z', true, 0x12_34_56);

        assert_eq!(0x7A_92_34_56, record);
        assert_eq!(b'z', edge(record));
        assert_eq!(true, is_last(record));
        assert_eq!(0x12_34_56, offset(record));
    }

    #[test]
    fn fields_dont_overlap() {
        let record = pack(0xFF, false, MAX_OFFSET);
        assert_eq!(0xFF, edge(record));
        assert_eq!(false, is_last(record));
        assert_eq!(MAX_OFFSET, offset(record));

        let record = pack(0, true, 0);
        assert_eq!(0, edge(record));
        assert_eq!(true, is_last(record));
        assert_eq!(0, offset(record));
        assert_eq!(0, record & EDGE_MASK);
    }
}
