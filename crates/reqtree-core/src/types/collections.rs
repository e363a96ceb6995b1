//! Re-exports of performance-oriented collection types.

pub use rustc_hash::FxHashMap;
pub use smallvec::SmallVec;

use super::identifiers::{AttributeId, AttributeValue};

/// Character attribute map: attribute id to current value.
pub type AttributeMap = FxHashMap<AttributeId, AttributeValue>;

/// SmallVec for the tree builder's operand stack (expressions rarely nest deeper).
pub type SmallVec8<T> = SmallVec<[T; 8]>;
