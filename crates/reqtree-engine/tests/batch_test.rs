//! Batch evaluation and item filtering tests.

use reqtree_core::config::ReqtreeConfig;
use reqtree_core::errors::CriteriaError;
use reqtree_core::traits::NoNames;
use reqtree_core::types::AttributeMap;
use reqtree_engine::criteria::operators::*;
use reqtree_engine::{evaluate_batch, retain_satisfiable, CriteriaEngine, RawCriterion};

struct Item {
    name: &'static str,
    requirements: Vec<RawCriterion>,
}

fn level_at_least(level: i64) -> Vec<RawCriterion> {
    vec![RawCriterion::new(1, 54, level, GREATER_OR_EQUAL)]
}

fn malformed() -> Vec<RawCriterion> {
    vec![RawCriterion::new(1, 54, 1, EQUAL), RawCriterion::connective(2, OR)]
}

fn parallel_engine() -> CriteriaEngine {
    let mut config = ReqtreeConfig::default();
    config.engine.parallel_threshold = Some(1);
    CriteriaEngine::new(&config, NoNames)
}

fn lists() -> Vec<Vec<RawCriterion>> {
    vec![
        level_at_least(10),
        malformed(),
        level_at_least(200),
        Vec::new(),
        malformed(),
    ]
}

fn character() -> AttributeMap {
    [(54, 150)].into_iter().collect()
}

#[test]
fn test_batch_preserves_order_and_records_errors() {
    let engine = CriteriaEngine::default();
    let batch = evaluate_batch(&engine, &lists(), &character());

    assert_eq!(batch.data.len(), 5);
    assert!(!batch.is_clean());
    assert_eq!(batch.error_count(), 2);

    let error_indices: Vec<usize> = batch.errors.iter().map(|(i, _)| *i).collect();
    assert_eq!(error_indices, vec![1, 4]);
    assert!(batch
        .errors
        .iter()
        .all(|(_, e)| matches!(e, CriteriaError::Malformed(_))));

    assert!(batch.data[1].is_none());
    assert!(batch.data[4].is_none());
    assert_eq!(batch.satisfiable_indices(), vec![0, 3]);
}

#[test]
fn test_parallel_path_matches_sequential() {
    let sequential = evaluate_batch(&CriteriaEngine::default(), &lists(), &character());
    let parallel = evaluate_batch(&parallel_engine(), &lists(), &character());

    assert_eq!(parallel.data, sequential.data);
    assert_eq!(parallel.satisfiable_indices(), sequential.satisfiable_indices());
    assert_eq!(parallel.error_count(), sequential.error_count());
}

#[test]
fn test_empty_batch_is_clean() {
    let batch = evaluate_batch(&CriteriaEngine::default(), &[], &character());
    assert!(batch.is_clean());
    assert!(batch.data.is_empty());
}

#[test]
fn test_retain_satisfiable_filters_items() {
    let items = vec![
        Item {
            name: "Basic Armor",
            requirements: level_at_least(10),
        },
        Item {
            name: "Broken Record",
            requirements: malformed(),
        },
        Item {
            name: "Endgame Armor",
            requirements: level_at_least(200),
        },
        Item {
            name: "Starter Pistol",
            requirements: Vec::new(),
        },
    ];

    for engine in [CriteriaEngine::default(), parallel_engine()] {
        let kept = retain_satisfiable(
            &engine,
            &items,
            |item| item.requirements.as_slice(),
            &character(),
        );
        let names: Vec<&str> = kept.iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["Basic Armor", "Starter Pistol"]);
    }
}
