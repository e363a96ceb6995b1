//! Attribute identifiers and collection types.

pub mod collections;
pub mod identifiers;

pub use collections::{AttributeMap, FxHashMap, SmallVec, SmallVec8};
pub use identifiers::{AttributeId, AttributeValue, CriterionId};
