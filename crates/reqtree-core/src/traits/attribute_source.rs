//! AttributeSource trait: where character attribute values come from.
//!
//! The engine never builds attribute maps itself. Equipment bonuses, base
//! stats and bitmask-encoded values are all computed by the caller and
//! exposed through this trait.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::types::{AttributeId, AttributeValue};

/// Read access to a numeric attribute map.
pub trait AttributeSource {
    /// Value of `id`, or `None` when the caller has no value for it.
    fn attribute(&self, id: AttributeId) -> Option<AttributeValue>;

    /// Value of `id`, reading an absent attribute as zero.
    fn value_or_zero(&self, id: AttributeId) -> AttributeValue {
        self.attribute(id).unwrap_or(0)
    }
}

impl<S: BuildHasher> AttributeSource for HashMap<AttributeId, AttributeValue, S> {
    fn attribute(&self, id: AttributeId) -> Option<AttributeValue> {
        self.get(&id).copied()
    }
}

impl AttributeSource for BTreeMap<AttributeId, AttributeValue> {
    fn attribute(&self, id: AttributeId) -> Option<AttributeValue> {
        self.get(&id).copied()
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, id: AttributeId) -> Option<AttributeValue> {
        (**self).attribute(id)
    }
}
