//! The word list variants being compared.
//!
//! Only `PackedWordList` has a real encoding, the others
//! are plain containers used as a baseline.

mod array;
mod null;
mod packed;
mod set;

pub use array::ArrayWordList;
pub use null::NullWordList;
pub use packed::PackedWordList;
pub use set::SetWordList;
