//! Core types for criteria records and classified nodes.

use std::fmt;

use reqtree_core::errors::CriteriaError;
use reqtree_core::types::{AttributeId, AttributeValue, CriterionId};
use serde::{Deserialize, Serialize};

/// One primitive condition record as stored on an action or item.
///
/// `value1`/`value2` are opaque slots whose meaning depends on `operator`:
/// for comparisons `value1` is the attribute id and `value2` the threshold,
/// connectives and modifiers carry `0, 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawCriterion {
    pub id: CriterionId,
    pub value1: i64,
    pub value2: i64,
    pub operator: i64,
}

impl RawCriterion {
    pub fn new(id: CriterionId, value1: i64, value2: i64, operator: i64) -> Self {
        Self {
            id,
            value1,
            value2,
            operator,
        }
    }

    /// A connective or modifier record (`value1 == value2 == 0`).
    pub fn connective(id: CriterionId, operator: i64) -> Self {
        Self::new(id, 0, 0, operator)
    }

    /// Both operand slots are zero.
    pub fn is_separator(&self) -> bool {
        self.value1 == 0 && self.value2 == 0
    }
}

/// Decode the data layer's JSON array form of a criteria list.
pub fn criteria_from_json(json: &str) -> Result<Vec<RawCriterion>, CriteriaError> {
    Ok(serde_json::from_str(json)?)
}

/// Comparison applied by a requirement leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    NotEqual,
    /// Every bit of the threshold mask is set in the value.
    FlagsSet,
    /// No bit of the threshold mask is set in the value.
    FlagsClear,
}

impl Comparator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::Greater => ">",
            Self::GreaterOrEqual => ">=",
            Self::Less => "<",
            Self::LessOrEqual => "<=",
            Self::NotEqual => "!=",
            Self::FlagsSet => "has flags",
            Self::FlagsClear => "lacks flags",
        }
    }

    /// Apply the comparison: `value <op> threshold`.
    pub fn compare(&self, value: AttributeValue, threshold: AttributeValue) -> bool {
        match self {
            Self::Equal => value == threshold,
            Self::Greater => value > threshold,
            Self::GreaterOrEqual => value >= threshold,
            Self::Less => value < threshold,
            Self::LessOrEqual => value <= threshold,
            Self::NotEqual => value != threshold,
            Self::FlagsSet => value & threshold == threshold,
            Self::FlagsClear => value & threshold == 0,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOp {
    And,
    Or,
    Not,
}

impl LogicalOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }

    /// Number of operands the operator pops in postfix form.
    pub fn arity(&self) -> usize {
        match self {
            Self::And | Self::Or => 2,
            Self::Not => 1,
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who a requirement applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Target,
}

/// The five kinds a raw criterion can classify as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Requirement,
    Logical(LogicalOp),
    Modifier(Scope),
    StateCheck,
    FunctionCheck,
}

impl NodeKind {
    /// Kinds that become leaves of the expression tree.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Requirement | Self::StateCheck | Self::FunctionCheck)
    }

    /// Kinds a pending scope modifier binds to.
    pub fn accepts_scope(&self) -> bool {
        matches!(self, Self::Requirement | Self::FunctionCheck)
    }
}

/// Leaf flavour carried into the tree, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeafKind {
    Comparison,
    State,
    Function,
}

/// A raw criterion after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedNode {
    pub criterion_id: CriterionId,
    pub operator_code: i64,
    pub kind: NodeKind,
    pub attribute_id: Option<AttributeId>,
    pub comparator: Option<Comparator>,
    pub threshold: Option<AttributeValue>,
    pub description: String,
    /// Set by the modifier binder, never by the classifier.
    pub is_target_requirement: bool,
}

impl ClassifiedNode {
    pub fn logical_op(&self) -> Option<LogicalOp> {
        match self.kind {
            NodeKind::Logical(op) => Some(op),
            _ => None,
        }
    }
}
