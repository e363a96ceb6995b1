//! Tree evaluator: bottom-up status and counts against an attribute map.

use reqtree_core::config::UnknownPolicy;
use reqtree_core::traits::AttributeSource;

use super::tree::{GroupNode, NotNode, RequirementNode, Status, TreeNode};

/// Annotates a built tree with statuses and met/total counts.
///
/// Referentially transparent: the input tree is not modified and the output
/// has the same shape. Attributes missing from the map read as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    policy: UnknownPolicy,
}

impl Evaluator {
    pub fn new(policy: UnknownPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnknownPolicy {
        self.policy
    }

    pub fn evaluate<A: AttributeSource + ?Sized>(&self, tree: &TreeNode, attrs: &A) -> TreeNode {
        match tree {
            TreeNode::Requirement(leaf) => TreeNode::Requirement(Self::evaluate_leaf(leaf, attrs)),
            TreeNode::And(group) => TreeNode::And(self.evaluate_and(group, attrs)),
            TreeNode::Or(group) => TreeNode::Or(self.evaluate_or(group, attrs)),
            TreeNode::Not(not) => TreeNode::Not(self.evaluate_not(not, attrs)),
        }
    }

    fn evaluate_leaf<A: AttributeSource + ?Sized>(
        leaf: &RequirementNode,
        attrs: &A,
    ) -> RequirementNode {
        let value = attrs.value_or_zero(leaf.attribute_id);
        RequirementNode {
            status: Status::from_bool(leaf.comparator.compare(value, leaf.threshold)),
            ..leaf.clone()
        }
    }

    fn evaluate_and<A: AttributeSource + ?Sized>(&self, group: &GroupNode, attrs: &A) -> GroupNode {
        let children: Vec<TreeNode> = group
            .children
            .iter()
            .map(|child| self.evaluate(child, attrs))
            .collect();

        let met_count: u32 = children.iter().map(TreeNode::met_count).sum();
        let total_count: u32 = children.iter().map(TreeNode::total_count).sum();
        let status = if met_count == total_count {
            Status::Met
        } else if met_count == 0 {
            Status::Unmet
        } else {
            Status::Partial
        };

        GroupNode {
            children,
            met_count,
            total_count,
            status,
        }
    }

    fn evaluate_or<A: AttributeSource + ?Sized>(&self, group: &GroupNode, attrs: &A) -> GroupNode {
        let children: Vec<TreeNode> = group
            .children
            .iter()
            .map(|child| self.evaluate(child, attrs))
            .collect();

        let status = Status::from_bool(children.iter().any(|c| self.counts_as_met(c)));

        GroupNode {
            children,
            met_count: u32::from(status == Status::Met),
            total_count: 1,
            status,
        }
    }

    fn evaluate_not<A: AttributeSource + ?Sized>(&self, not: &NotNode, attrs: &A) -> NotNode {
        let child = self.evaluate(&not.child, attrs);
        let status = match child.status() {
            Status::Met => Status::Unmet,
            Status::Unmet => Status::Met,
            Status::Partial | Status::Unknown => Status::Unknown,
        };
        let met = status == Status::Met
            || (status == Status::Unknown && self.policy.unknown_is_met());

        NotNode {
            child: Box::new(child),
            met_count: u32::from(met),
            total_count: 1,
            status,
        }
    }

    /// An OR branch is satisfied when it is met, or unknown under the
    /// permissive policy.
    fn counts_as_met(&self, node: &TreeNode) -> bool {
        match node.status() {
            Status::Met => true,
            Status::Unknown => self.policy.unknown_is_met(),
            Status::Unmet | Status::Partial => false,
        }
    }
}

/// Evaluate with the conservative unknown policy.
pub fn evaluate<A: AttributeSource + ?Sized>(tree: &TreeNode, attrs: &A) -> TreeNode {
    Evaluator::default().evaluate(tree, attrs)
}
