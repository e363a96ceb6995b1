//! Criterion classifier: one raw record in, one classified node out.

use reqtree_core::constants::DEFAULT_FALLBACK_ATTRIBUTE_LABEL;
use reqtree_core::traits::{display_name, AttributeNames};

use super::operators;
use super::types::{ClassifiedNode, Comparator, NodeKind, RawCriterion, Scope};

/// Classifies raw criteria and writes their descriptions.
///
/// Pure and total: every operator code yields a node. Codes outside the
/// known tables degrade to a best-effort comparison so malformed game data
/// still renders.
pub struct Classifier<'a, N: AttributeNames + ?Sized> {
    names: &'a N,
    fallback_label: &'a str,
}

impl<'a, N: AttributeNames + ?Sized> Classifier<'a, N> {
    pub fn new(names: &'a N) -> Self {
        Self {
            names,
            fallback_label: DEFAULT_FALLBACK_ATTRIBUTE_LABEL,
        }
    }

    /// Label used for attributes the naming service cannot name.
    pub fn with_fallback_label(mut self, label: &'a str) -> Self {
        self.fallback_label = label;
        self
    }

    pub fn classify(&self, raw: &RawCriterion) -> ClassifiedNode {
        let op = raw.operator;

        // The modifier also carries 0/0 operands, so it must be matched
        // before the connective check.
        if op == operators::TARGET_MODIFIER {
            return self.structural(raw, NodeKind::Modifier(Scope::Target), "On target");
        }

        if raw.is_separator() {
            if let Some(logical) = operators::connective_for(op) {
                return self.structural(raw, NodeKind::Logical(logical), logical.as_str());
            }
        }

        if let Some(comparator) = operators::state_check_for(op) {
            let name = self.name(raw.value1);
            let description = format!("{name} {} {:#x}", comparator.symbol(), raw.value2);
            return self.leaf(raw, NodeKind::StateCheck, comparator, raw.value2, description);
        }

        if operators::is_function_check(op) {
            let name = self.name(raw.value1);
            return if op == operators::POSSESSES {
                let count = raw.value2.max(1);
                let description = if count == 1 {
                    format!("Has {name}")
                } else {
                    format!("Has {name} x{count}")
                };
                self.leaf(raw, NodeKind::FunctionCheck, Comparator::GreaterOrEqual, count, description)
            } else {
                let description = format!("Lacks {name}");
                self.leaf(raw, NodeKind::FunctionCheck, Comparator::Equal, 0, description)
            };
        }

        let name = self.name(raw.value1);
        match operators::comparator_for(op) {
            Some(comparator) => {
                let description = format!("{name} {} {}", comparator.symbol(), raw.value2);
                self.leaf(raw, NodeKind::Requirement, comparator, raw.value2, description)
            }
            None => {
                let comparator = operators::best_effort_comparator(op);
                let description =
                    format!("{name} {} {} (operator {op})", comparator.symbol(), raw.value2);
                self.leaf(raw, NodeKind::Requirement, comparator, raw.value2, description)
            }
        }
    }

    pub fn classify_all(&self, criteria: &[RawCriterion]) -> Vec<ClassifiedNode> {
        criteria.iter().map(|raw| self.classify(raw)).collect()
    }

    fn name(&self, id: i64) -> String {
        display_name(self.names, id, self.fallback_label)
    }

    fn structural(&self, raw: &RawCriterion, kind: NodeKind, description: &str) -> ClassifiedNode {
        ClassifiedNode {
            criterion_id: raw.id,
            operator_code: raw.operator,
            kind,
            attribute_id: None,
            comparator: None,
            threshold: None,
            description: description.to_string(),
            is_target_requirement: false,
        }
    }

    fn leaf(
        &self,
        raw: &RawCriterion,
        kind: NodeKind,
        comparator: Comparator,
        threshold: i64,
        description: String,
    ) -> ClassifiedNode {
        ClassifiedNode {
            criterion_id: raw.id,
            operator_code: raw.operator,
            kind,
            attribute_id: Some(raw.value1),
            comparator: Some(comparator),
            threshold: Some(threshold),
            description,
            is_target_requirement: false,
        }
    }
}

/// Classify one record with the default fallback label.
pub fn classify<N: AttributeNames + ?Sized>(raw: &RawCriterion, names: &N) -> ClassifiedNode {
    Classifier::new(names).classify(raw)
}
