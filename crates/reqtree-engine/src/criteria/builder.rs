//! Tree builder: postfix stack machine over bound classified nodes.

use reqtree_core::constants::DEFAULT_MAX_DEPTH;
use reqtree_core::errors::MalformedCriteriaError;
use reqtree_core::types::SmallVec8;

use super::tree::{RequirementNode, TreeNode};
use super::types::{ClassifiedNode, LogicalOp, NodeKind};

/// Operand stack entry: a subtree and its nesting depth (a leaf is 1).
type Operand = (TreeNode, usize);

/// Rebuild the expression tree from a modifier-bound postfix stream.
///
/// Returns `Ok(None)` for an empty stream (no requirements). Leaves push,
/// NOT pops one, AND/OR pop two. OR chains are flattened as they are built,
/// so no OR ever has a direct OR child. The stream must reduce to exactly
/// one expression.
pub fn build(nodes: &[ClassifiedNode]) -> Result<Option<TreeNode>, MalformedCriteriaError> {
    build_with_limit(nodes, DEFAULT_MAX_DEPTH)
}

/// As `build`, rejecting trees nested deeper than `max_depth` levels.
///
/// Every later pass walks the tree recursively, so the limit bounds their
/// stack use. Depth is measured after OR flattening.
pub fn build_with_limit(
    nodes: &[ClassifiedNode],
    max_depth: usize,
) -> Result<Option<TreeNode>, MalformedCriteriaError> {
    let mut stack: SmallVec8<Operand> = SmallVec8::new();

    for (position, node) in nodes.iter().enumerate() {
        match node.kind {
            NodeKind::Requirement | NodeKind::StateCheck | NodeKind::FunctionCheck => {
                if let Some(leaf) = RequirementNode::from_classified(node) {
                    stack.push((TreeNode::requirement(leaf), 1));
                }
            }
            NodeKind::Logical(op) => {
                let (combined, depth) = match op {
                    LogicalOp::Not => match stack.pop() {
                        Some((child, depth)) => (TreeNode::not(child), depth + 1),
                        None => return Err(underflow(op, position, 0)),
                    },
                    LogicalOp::And | LogicalOp::Or => match (stack.pop(), stack.pop()) {
                        (Some(right), Some(left)) if op == LogicalOp::Or => {
                            let depth = branch_depth(&left).max(branch_depth(&right)) + 1;
                            (TreeNode::or(vec![left.0, right.0]), depth)
                        }
                        (Some((right, r)), Some((left, l))) => {
                            (TreeNode::and(vec![left, right]), l.max(r) + 1)
                        }
                        (right, _) => {
                            return Err(underflow(op, position, usize::from(right.is_some())))
                        }
                    },
                };
                if depth > max_depth {
                    return Err(MalformedCriteriaError::TooDeep {
                        position,
                        depth,
                        limit: max_depth,
                    });
                }
                stack.push((combined, depth));
            }
            NodeKind::Modifier(_) => {
                tracing::debug!(
                    criterion_id = node.criterion_id,
                    position,
                    "unbound scope modifier reached the tree builder, skipped"
                );
            }
        }
    }

    match stack.len() {
        0 if nodes.iter().all(|n| matches!(n.kind, NodeKind::Modifier(_))) => Ok(None),
        1 => Ok(stack.pop().map(|(tree, _)| tree)),
        remaining => Err(MalformedCriteriaError::UnbalancedStack { remaining }),
    }
}

/// Depth an OR operand contributes. An OR child is spliced into its parent,
/// so only its branches count.
fn branch_depth((node, depth): &Operand) -> usize {
    match node {
        TreeNode::Or(_) => depth - 1,
        _ => *depth,
    }
}

fn underflow(op: LogicalOp, position: usize, available: usize) -> MalformedCriteriaError {
    MalformedCriteriaError::StackUnderflow {
        operator: op.as_str(),
        position,
        needed: op.arity(),
        available,
    }
}
