//! Unmet-requirement collector.

use reqtree_core::config::UnknownPolicy;

use super::tree::{Status, TreeNode};

/// Smallest correctly-scoped set of unmet entries in an evaluated tree.
///
/// - unmet leaf: listed
/// - AND: every unmet entry of every child
/// - unmet OR: the whole group, once ("one of: ...")
/// - unmet NOT: the NOT node itself, no recursion
///
/// An unknown NOT is listed under the conservative policy only.
pub fn collect_unmet(tree: &TreeNode, policy: UnknownPolicy) -> Vec<TreeNode> {
    let mut unmet = Vec::new();
    collect_into(tree, policy, &mut unmet);
    unmet
}

pub fn collect_unmet_conservative(tree: &TreeNode) -> Vec<TreeNode> {
    collect_unmet(tree, UnknownPolicy::Conservative)
}

fn collect_into(node: &TreeNode, policy: UnknownPolicy, out: &mut Vec<TreeNode>) {
    match node {
        TreeNode::Requirement(leaf) => {
            if leaf.status == Status::Unmet {
                out.push(node.clone());
            }
        }
        TreeNode::And(group) => {
            for child in &group.children {
                collect_into(child, policy, out);
            }
        }
        TreeNode::Or(group) => {
            if group.status == Status::Unmet {
                out.push(node.clone());
            }
        }
        TreeNode::Not(not) => match not.status {
            Status::Unmet => out.push(node.clone()),
            Status::Unknown if !policy.unknown_is_met() => out.push(node.clone()),
            _ => {}
        },
    }
}
