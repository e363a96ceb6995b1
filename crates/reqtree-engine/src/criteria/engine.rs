//! Criteria engine: the whole pipeline behind one entry point.

use serde::{Deserialize, Serialize};

use std::path::Path;

use reqtree_core::config::{ConfigOverrides, ReqtreeConfig, UnknownPolicy};
use reqtree_core::constants::DEFAULT_FALLBACK_ATTRIBUTE_LABEL;
use reqtree_core::errors::{CriteriaError, MalformedCriteriaError};
use reqtree_core::traits::{AttributeNames, AttributeSource, NoNames};

use super::binder::ModifierBinder;
use super::builder::build_with_limit;
use super::classifier::Classifier;
use super::collector::collect_unmet;
use super::evaluator::Evaluator;
use super::tree::{Status, TreeNode};
use super::types::RawCriterion;

/// Outcome of one evaluation, consumed by display and filtering layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub can_satisfy: bool,
    /// Unmet leaves, whole unmet OR groups and unmet NOT nodes.
    pub unmet: Vec<TreeNode>,
}

impl EvaluationResult {
    /// Result for a list with no requirements.
    pub fn satisfied() -> Self {
        Self {
            can_satisfy: true,
            unmet: Vec::new(),
        }
    }
}

/// Annotated tree plus the derived result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// `None` when the list had no requirements.
    pub tree: Option<TreeNode>,
    pub result: EvaluationResult,
}

/// Classify → bind → build → evaluate → collect.
///
/// Holds only configuration and the naming service; every call builds fresh
/// nodes, so one engine can serve many independent evaluations.
pub struct CriteriaEngine<N: AttributeNames = NoNames> {
    names: N,
    binder: ModifierBinder,
    evaluator: Evaluator,
    fallback_label: String,
    parallel_threshold: usize,
    max_depth: usize,
}

impl Default for CriteriaEngine<NoNames> {
    fn default() -> Self {
        Self::new(&ReqtreeConfig::default(), NoNames)
    }
}

impl<N: AttributeNames> CriteriaEngine<N> {
    pub fn new(config: &ReqtreeConfig, names: N) -> Self {
        Self {
            names,
            binder: ModifierBinder::new(
                config.display.effective_target_prefix(),
                config.engine.effective_warn_on_unbound_modifier(),
            ),
            evaluator: Evaluator::new(config.engine.effective_unknown_policy()),
            fallback_label: config.display.effective_fallback_attribute_label().to_string(),
            parallel_threshold: config.engine.effective_parallel_threshold(),
            max_depth: config.engine.effective_max_depth(),
        }
    }

    /// Engine configured from the layered config rooted at `root`.
    pub fn load(
        root: &Path,
        overrides: Option<&ConfigOverrides>,
        names: N,
    ) -> Result<Self, CriteriaError> {
        let config = ReqtreeConfig::load(root, overrides)?;
        Ok(Self::new(&config, names))
    }

    /// Engine with default configuration and the given naming service.
    pub fn with_names(names: N) -> Self {
        Self::new(&ReqtreeConfig::default(), names)
    }

    pub fn names(&self) -> &N {
        &self.names
    }

    pub fn unknown_policy(&self) -> UnknownPolicy {
        self.evaluator.policy()
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Build the unevaluated tree for a criteria list.
    pub fn prepare(
        &self,
        criteria: &[RawCriterion],
    ) -> Result<Option<TreeNode>, MalformedCriteriaError> {
        let label = if self.fallback_label.is_empty() {
            DEFAULT_FALLBACK_ATTRIBUTE_LABEL
        } else {
            self.fallback_label.as_str()
        };
        let classified = Classifier::new(&self.names)
            .with_fallback_label(label)
            .classify_all(criteria);
        let bound = self.binder.bind(classified);
        build_with_limit(&bound, self.max_depth)
    }

    /// Evaluate a criteria list against an attribute map.
    ///
    /// Fails only when the list is not a coherent postfix expression.
    pub fn evaluate<A: AttributeSource + ?Sized>(
        &self,
        criteria: &[RawCriterion],
        attrs: &A,
    ) -> Result<Evaluation, CriteriaError> {
        let Some(tree) = self.prepare(criteria)? else {
            return Ok(Evaluation {
                tree: None,
                result: EvaluationResult::satisfied(),
            });
        };

        let evaluated = self.evaluator.evaluate(&tree, attrs);
        let policy = self.evaluator.policy();
        let can_satisfy = match evaluated.status() {
            Status::Met => true,
            Status::Unknown => policy.unknown_is_met(),
            Status::Unmet | Status::Partial => false,
        };
        let unmet = collect_unmet(&evaluated, policy);

        tracing::debug!(
            criteria = criteria.len(),
            nodes = evaluated.node_count(),
            unmet = unmet.len(),
            can_satisfy,
            "criteria evaluated"
        );

        Ok(Evaluation {
            tree: Some(evaluated),
            result: EvaluationResult { can_satisfy, unmet },
        })
    }

    /// Filtering shorthand: a malformed list is logged and reported as
    /// unsatisfiable so the caller can skip the item.
    pub fn can_satisfy<A: AttributeSource + ?Sized>(
        &self,
        criteria: &[RawCriterion],
        attrs: &A,
    ) -> bool {
        match self.evaluate(criteria, attrs) {
            Ok(evaluation) => evaluation.result.can_satisfy,
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed criteria list");
                false
            }
        }
    }
}
