//! Collaborator seams: where attribute values and display names come from.

pub mod attribute_names;
pub mod attribute_source;

pub use attribute_names::{display_name, AttributeNames, NoNames};
pub use attribute_source::AttributeSource;
