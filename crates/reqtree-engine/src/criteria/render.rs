//! Text rendering of requirement trees for the display layer.

use std::fmt::{self, Write as _};

use super::tree::{Status, TreeNode};

impl fmt::Display for TreeNode {
    /// Infix form, e.g. `(Profession = 11 OR Profession = 12) AND Level > 99`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Requirement(leaf) => f.write_str(&leaf.description),
            TreeNode::And(group) => write_joined(f, &group.children, " AND ", |c| {
                matches!(c, TreeNode::Or(_))
            }),
            TreeNode::Or(group) => write_joined(f, &group.children, " OR ", |c| {
                matches!(c, TreeNode::And(_))
            }),
            TreeNode::Not(not) => match not.child.as_ref() {
                TreeNode::Requirement(_) | TreeNode::Not(_) => write!(f, "NOT {}", not.child),
                group => write!(f, "NOT ({group})"),
            },
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    children: &[TreeNode],
    separator: &str,
    needs_parens: impl Fn(&TreeNode) -> bool,
) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if needs_parens(child) {
            write!(f, "({child})")?;
        } else {
            write!(f, "{child}")?;
        }
    }
    Ok(())
}

fn marker(status: Status) -> &'static str {
    match status {
        Status::Met => "[x]",
        Status::Unmet => "[ ]",
        Status::Partial => "[~]",
        Status::Unknown => "[?]",
    }
}

/// Indented checklist of an evaluated tree, one node per line.
///
/// OR groups are headed `One of:` so a choice reads as a single
/// requirement. A NOT over an AND is headed `Not all of:`, any other NOT
/// `None of:`.
pub fn render_outline(tree: &TreeNode) -> String {
    let mut out = String::new();
    write_outline(&mut out, tree, 0);
    out
}

fn write_outline(out: &mut String, node: &TreeNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let mark = marker(node.status());
    // Writing to a String cannot fail.
    let _ = match node {
        TreeNode::Requirement(leaf) => writeln!(out, "{indent}{mark} {}", leaf.description),
        TreeNode::And(group) => writeln!(
            out,
            "{indent}{mark} All of ({}/{}):",
            group.met_count, group.total_count
        ),
        TreeNode::Or(_) => writeln!(out, "{indent}{mark} One of:"),
        TreeNode::Not(not) => match not.child.as_ref() {
            TreeNode::And(_) => writeln!(out, "{indent}{mark} Not all of:"),
            _ => writeln!(out, "{indent}{mark} None of:"),
        },
    };
    for child in node.children() {
        write_outline(out, child, depth + 1);
    }
}
