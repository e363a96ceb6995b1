//! Batch evaluation over independent criteria lists.
//!
//! Each list is evaluated on its own; a malformed list is recorded as a
//! non-fatal error and never aborts the rest of the batch.

use rayon::prelude::*;

use reqtree_core::errors::CriteriaError;
use reqtree_core::traits::{AttributeNames, AttributeSource};

use crate::criteria::engine::{CriteriaEngine, EvaluationResult};
use crate::criteria::types::RawCriterion;

/// Results of a batch run in input order, plus the lists that failed.
#[derive(Debug, Default)]
pub struct BatchResult {
    /// One entry per input list; `None` where the list failed to build.
    pub data: Vec<Option<EvaluationResult>>,
    /// Non-fatal errors keyed by input index.
    pub errors: Vec<(usize, CriteriaError)>,
}

impl BatchResult {
    /// Returns true if every list evaluated.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Indices of the lists the character can satisfy.
    pub fn satisfiable_indices(&self) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, r)| r.as_ref().is_some_and(|r| r.can_satisfy))
            .map(|(i, _)| i)
            .collect()
    }
}

/// Evaluate every list against the same attribute map.
///
/// Runs on the rayon pool once the batch reaches the engine's parallel
/// threshold; output order always matches input order.
pub fn evaluate_batch<N, A>(
    engine: &CriteriaEngine<N>,
    lists: &[Vec<RawCriterion>],
    attrs: &A,
) -> BatchResult
where
    N: AttributeNames + Sync,
    A: AttributeSource + Sync + ?Sized,
{
    let evaluate_one = |list: &Vec<RawCriterion>| {
        engine
            .evaluate(list, attrs)
            .map(|evaluation| evaluation.result)
    };

    let outcomes: Vec<Result<EvaluationResult, CriteriaError>> =
        if lists.len() >= engine.parallel_threshold() {
            lists.par_iter().map(evaluate_one).collect()
        } else {
            lists.iter().map(evaluate_one).collect()
        };

    let mut result = BatchResult {
        data: Vec::with_capacity(outcomes.len()),
        errors: Vec::new(),
    };
    for (index, outcome) in outcomes.into_iter().enumerate() {
        match outcome {
            Ok(evaluation) => result.data.push(Some(evaluation)),
            Err(e) => {
                tracing::warn!(index, error = %e, "criteria list skipped");
                result.data.push(None);
                result.errors.push((index, e));
            }
        }
    }

    tracing::debug!(
        batch_size = lists.len(),
        batch_errors = result.errors.len(),
        "batch evaluated"
    );

    result
}

/// Keep the items whose criteria the character satisfies.
/// Items with malformed criteria are dropped.
pub fn retain_satisfiable<'a, T, N, A, F>(
    engine: &CriteriaEngine<N>,
    items: &'a [T],
    criteria_of: F,
    attrs: &A,
) -> Vec<&'a T>
where
    T: Sync,
    N: AttributeNames + Sync,
    A: AttributeSource + Sync + ?Sized,
    F: Fn(&T) -> &[RawCriterion] + Sync,
{
    if items.len() >= engine.parallel_threshold() {
        items
            .par_iter()
            .filter(|item| engine.can_satisfy(criteria_of(*item), attrs))
            .collect()
    } else {
        items
            .iter()
            .filter(|item| engine.can_satisfy(criteria_of(*item), attrs))
            .collect()
    }
}
