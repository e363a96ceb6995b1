//! Identifier types shared between the data layer and the engine.

/// Numeric attribute (stat/skill) identifier, as carried in `value1`.
pub type AttributeId = i64;

/// Numeric attribute value or comparison threshold.
pub type AttributeValue = i64;

/// Identifier of a raw criterion record within its source list.
pub type CriterionId = i64;
