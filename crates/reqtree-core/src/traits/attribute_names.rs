//! AttributeNames trait: the external naming service.
//!
//! Descriptions are built from display names only; nothing else in the
//! engine knows what an attribute id means.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::types::AttributeId;

/// Resolves attribute ids to human-readable names.
pub trait AttributeNames {
    fn attribute_name(&self, id: AttributeId) -> Option<String>;
}

/// Naming service that knows no names. Every attribute uses the fallback label.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNames;

impl AttributeNames for NoNames {
    fn attribute_name(&self, _id: AttributeId) -> Option<String> {
        None
    }
}

impl<S: BuildHasher> AttributeNames for HashMap<AttributeId, String, S> {
    fn attribute_name(&self, id: AttributeId) -> Option<String> {
        self.get(&id).cloned()
    }
}

impl AttributeNames for BTreeMap<AttributeId, String> {
    fn attribute_name(&self, id: AttributeId) -> Option<String> {
        self.get(&id).cloned()
    }
}

impl<T: AttributeNames + ?Sized> AttributeNames for &T {
    fn attribute_name(&self, id: AttributeId) -> Option<String> {
        (**self).attribute_name(id)
    }
}

/// Display name for `id`, or `"<fallback_label> <id>"` when unnamed.
pub fn display_name<N: AttributeNames + ?Sized>(
    names: &N,
    id: AttributeId,
    fallback_label: &str,
) -> String {
    names
        .attribute_name(id)
        .unwrap_or_else(|| format!("{fallback_label} {id}"))
}
