//! Turn the builder's nodes into the flat array of records.
//!
//! A sibling group is written first, followed by the groups
//! of all its children, in the same order as the records:
//!
//! ```text
//! +----+-+--------------------+
//! |char|0|   offset to child 1|
//! +----+-+--------------------+
//!          ......
//! +----+-+--------------------+
//! |char|1|   offset to child N|
//! +---------------------------+
//! |     group of child 1      |
//! +---------------------------+
//!          ......
//! +---------------------------+
//! |     group of child N      |
//! +---------------------------+
//! ```
//!
//! A child that is only the end of a word (or has no children at all)
//! doesn't get a group, its record has an offset of zero.

use tracing::warn;

use crate::error::{Error, Result};

use super::builder::TrieNode;
use super::record::{self, Record, MAX_OFFSET};

/// Limits enforced while encoding.
///
/// The offset limit is inclusive and can never be set above
/// what the 23 bits offset field can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderLimits {
    max_offset: u32
}

impl EncoderLimits {
    /// Values above `MAX_OFFSET` are clamped.
    pub fn new(max_offset: u32) -> Self {
        EncoderLimits {
            max_offset: max_offset.min(MAX_OFFSET)
        }
    }

    /// Largest accepted offset, and largest accepted array length.
    pub fn max_offset(&self) -> u32 {
        self.max_offset
    }
}

impl Default for EncoderLimits {
    fn default() -> Self {
        EncoderLimits::new(MAX_OFFSET)
    }
}

/// A sibling group whose records are still being filled.
struct PendingGroup {
    node_index: usize,
    /// Index of the group's first record, offsets are relative to it.
    start: usize,
    /// Next child to encode.
    position: usize
}

/// Encode the whole trie rooted at index 0.
/// The children list of every node get sorted in place.
///
/// The groups are laid out depth first, but walked with an explicit
/// stack: a single long word would otherwise need one call per byte.
pub(crate) fn encode(nodes: &mut [TrieNode], limits: EncoderLimits) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let mut pending = Vec::new();

    if !nodes.is_empty() {
        pending.push(open_group(nodes, 0, &mut records));
    }

    while let Some(group) = pending.last_mut() {
        let children = &nodes[group.node_index].children;
        if group.position == children.len() {
            pending.pop();
            continue;
        }

        let (byte, child_index) = children[group.position];
        let last = group.position + 1 == children.len();
        let slot = group.start + group.position;
        group.position += 1;

        let child_index = child_index.get();
        if !needs_group(&nodes[child_index]) {
            records[slot] = record::pack(byte, last, 0);
            continue;
        }

        // The child's group starts right after everything written so far.
        let offset = records.len() - group.start;
        if offset > limits.max_offset as usize {
            warn!(offset, limit = limits.max_offset, "sibling group offset overflow");
            return Err(Error::EncodingOverflow {
                offset,
                limit: limits.max_offset
            });
        }

        records[slot] = record::pack(byte, last, offset as u32);
        let child = open_group(nodes, child_index, &mut records);
        pending.push(child);
    }

    if records.len() > limits.max_offset as usize {
        warn!(records = records.len(), limit = limits.max_offset, "packed array too large");
        return Err(Error::EncodingOverflow {
            offset: records.len(),
            limit: limits.max_offset
        });
    }

    Ok(records)
}

/// A child need its own group unless it has no children
/// or its only child is the end of word marker.
fn needs_group(node: &TrieNode) -> bool {
    match node.children.as_slice() {
        [] => false,
        [(0, _)] => false,
        _ => true
    }
}

/// Sort the node's children and reserve their records
/// at the end of `records`.
fn open_group(nodes: &mut [TrieNode], node_index: usize, records: &mut Vec<Record>) -> PendingGroup {
    nodes[node_index].children.sort_unstable_by_key(|(byte, _)| *byte);

    let start = records.len();
    records.resize(start + nodes[node_index].children.len(), 0);

    PendingGroup {
        node_index,
        start,
        position: 0
    }
}
