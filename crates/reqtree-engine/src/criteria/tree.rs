//! Expression tree types.
//!
//! `TreeNode` is a sum type so every pass handles each connective
//! exhaustively. Counting rules:
//! - leaf: one requirement
//! - AND: sum of its children
//! - OR: always one requirement, however many branches it has
//! - NOT: one requirement

use serde::{Deserialize, Serialize};
use std::fmt;

use reqtree_core::types::{AttributeId, AttributeValue, CriterionId};

use super::types::{ClassifiedNode, Comparator, LeafKind, LogicalOp, NodeKind};

/// Per-node evaluation status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Met,
    Unmet,
    /// AND only: some but not all requirements met.
    Partial,
    /// Not yet evaluated, or a NOT over a partial/unknown child.
    Unknown,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Met => "met",
            Self::Unmet => "unmet",
            Self::Partial => "partial",
            Self::Unknown => "unknown",
        }
    }

    pub fn from_bool(met: bool) -> Self {
        if met {
            Self::Met
        } else {
            Self::Unmet
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single comparison leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementNode {
    pub criterion_id: CriterionId,
    pub kind: LeafKind,
    pub attribute_id: AttributeId,
    pub comparator: Comparator,
    pub threshold: AttributeValue,
    pub is_target_requirement: bool,
    pub description: String,
    pub status: Status,
}

impl RequirementNode {
    /// Leaf for a classified node. `None` for connectives and modifiers.
    pub fn from_classified(node: &ClassifiedNode) -> Option<Self> {
        let kind = match node.kind {
            NodeKind::Requirement => LeafKind::Comparison,
            NodeKind::StateCheck => LeafKind::State,
            NodeKind::FunctionCheck => LeafKind::Function,
            NodeKind::Logical(_) | NodeKind::Modifier(_) => return None,
        };
        Some(Self {
            criterion_id: node.criterion_id,
            kind,
            attribute_id: node.attribute_id?,
            comparator: node.comparator?,
            threshold: node.threshold?,
            is_target_requirement: node.is_target_requirement,
            description: node.description.clone(),
            status: Status::Unknown,
        })
    }
}

/// AND / OR group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    pub children: Vec<TreeNode>,
    pub met_count: u32,
    pub total_count: u32,
    pub status: Status,
}

/// Negation of exactly one child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotNode {
    pub child: Box<TreeNode>,
    pub met_count: u32,
    pub total_count: u32,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    Requirement(RequirementNode),
    And(GroupNode),
    Or(GroupNode),
    Not(NotNode),
}

impl TreeNode {
    /// Unevaluated AND over `children`. Nested ANDs are kept as-is.
    pub fn and(children: Vec<TreeNode>) -> Self {
        let total_count = children.iter().map(TreeNode::total_count).sum();
        Self::And(GroupNode {
            children,
            met_count: 0,
            total_count,
            status: Status::Unknown,
        })
    }

    /// Unevaluated OR over `children`, splicing any OR child's branches
    /// in place of the child.
    pub fn or(children: Vec<TreeNode>) -> Self {
        let mut flat = Vec::with_capacity(children.len());
        for child in children {
            match child {
                Self::Or(group) => flat.extend(group.children),
                other => flat.push(other),
            }
        }
        Self::Or(GroupNode {
            children: flat,
            met_count: 0,
            total_count: 1,
            status: Status::Unknown,
        })
    }

    pub fn not(child: TreeNode) -> Self {
        Self::Not(NotNode {
            child: Box::new(child),
            met_count: 0,
            total_count: 1,
            status: Status::Unknown,
        })
    }

    pub fn requirement(node: RequirementNode) -> Self {
        Self::Requirement(node)
    }

    pub fn status(&self) -> Status {
        match self {
            Self::Requirement(r) => r.status,
            Self::And(g) | Self::Or(g) => g.status,
            Self::Not(n) => n.status,
        }
    }

    pub fn met_count(&self) -> u32 {
        match self {
            Self::Requirement(r) => u32::from(r.status == Status::Met),
            Self::And(g) | Self::Or(g) => g.met_count,
            Self::Not(n) => n.met_count,
        }
    }

    pub fn total_count(&self) -> u32 {
        match self {
            Self::Requirement(_) => 1,
            Self::And(g) | Self::Or(g) => g.total_count,
            Self::Not(n) => n.total_count,
        }
    }

    /// Connective at this node, `None` for leaves.
    pub fn operator(&self) -> Option<LogicalOp> {
        match self {
            Self::Requirement(_) => None,
            Self::And(_) => Some(LogicalOp::And),
            Self::Or(_) => Some(LogicalOp::Or),
            Self::Not(_) => Some(LogicalOp::Not),
        }
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Requirement(_) => &[],
            Self::And(g) | Self::Or(g) => &g.children,
            Self::Not(n) => std::slice::from_ref(n.child.as_ref()),
        }
    }

    pub fn as_requirement(&self) -> Option<&RequirementNode> {
        match self {
            Self::Requirement(r) => Some(r),
            _ => None,
        }
    }

    /// Total number of nodes in the subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// All requirement leaves in left-to-right order.
    pub fn requirements(&self) -> Vec<&RequirementNode> {
        let mut out = Vec::new();
        self.collect_requirements(&mut out);
        out
    }

    fn collect_requirements<'a>(&'a self, out: &mut Vec<&'a RequirementNode>) {
        match self {
            Self::Requirement(r) => out.push(r),
            _ => {
                for child in self.children() {
                    child.collect_requirements(out);
                }
            }
        }
    }
}
