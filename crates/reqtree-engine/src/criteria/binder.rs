//! Modifier binder: attaches target scope modifiers to the next leaf.

use reqtree_core::constants::DEFAULT_TARGET_PREFIX;
use reqtree_core::types::CriterionId;

use super::types::{ClassifiedNode, NodeKind, Scope};

/// Single left-to-right pass over classified nodes.
///
/// A modifier sets the pending scope and is removed from the stream. The
/// next comparison or function check consumes it. A modifier overwritten by a
/// later one, or left pending at the end of the stream, binds to nothing and
/// is dropped with a log event.
#[derive(Debug, Clone)]
pub struct ModifierBinder {
    target_prefix: String,
    warn_on_unbound: bool,
}

impl Default for ModifierBinder {
    fn default() -> Self {
        Self {
            target_prefix: DEFAULT_TARGET_PREFIX.to_string(),
            warn_on_unbound: false,
        }
    }
}

impl ModifierBinder {
    pub fn new(target_prefix: impl Into<String>, warn_on_unbound: bool) -> Self {
        Self {
            target_prefix: target_prefix.into(),
            warn_on_unbound,
        }
    }

    pub fn bind(&self, nodes: Vec<ClassifiedNode>) -> Vec<ClassifiedNode> {
        let (bound, dropped) = self.bind_with_dropped(nodes);
        for criterion_id in dropped {
            if self.warn_on_unbound {
                tracing::warn!(criterion_id, "scope modifier has no requirement to bind to, dropped");
            } else {
                tracing::debug!(criterion_id, "scope modifier has no requirement to bind to, dropped");
            }
        }
        bound
    }

    /// As `bind`, also returning the ids of modifiers that bound to nothing:
    /// those overwritten by a later modifier and one left pending at the end.
    pub fn bind_with_dropped(
        &self,
        nodes: Vec<ClassifiedNode>,
    ) -> (Vec<ClassifiedNode>, Vec<CriterionId>) {
        let mut bound = Vec::with_capacity(nodes.len());
        let mut dropped = Vec::new();
        let mut pending: Option<(Scope, CriterionId)> = None;

        for node in nodes {
            match (node.kind, pending) {
                (NodeKind::Modifier(scope), previous) => {
                    // A later modifier overwrites an earlier pending one.
                    if let Some((_, overwritten)) = previous {
                        dropped.push(overwritten);
                    }
                    pending = Some((scope, node.criterion_id));
                }
                (kind, Some((scope, _))) if kind.accepts_scope() => {
                    bound.push(self.apply(node, scope));
                    pending = None;
                }
                _ => bound.push(node),
            }
        }

        dropped.extend(pending.map(|(_, criterion_id)| criterion_id));
        (bound, dropped)
    }

    fn apply(&self, mut node: ClassifiedNode, scope: Scope) -> ClassifiedNode {
        match scope {
            Scope::Target => {
                node.is_target_requirement = true;
                node.description = format!("{}{}", self.target_prefix, node.description);
            }
        }
        node
    }
}

/// Bind with the default `"Target: "` prefix.
pub fn bind(nodes: Vec<ClassifiedNode>) -> Vec<ClassifiedNode> {
    ModifierBinder::default().bind(nodes)
}
