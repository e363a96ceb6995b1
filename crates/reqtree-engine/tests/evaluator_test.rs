//! Evaluator and unmet collector tests.

use reqtree_core::config::UnknownPolicy;
use reqtree_core::types::AttributeMap;
use reqtree_engine::criteria::operators::*;
use reqtree_engine::criteria::*;

fn tree(criteria: &[RawCriterion]) -> TreeNode {
    CriteriaEngine::default()
        .prepare(criteria)
        .unwrap()
        .unwrap()
}

fn leaf(attr: i64, value: i64, op: i64) -> RawCriterion {
    RawCriterion::new(attr, attr, value, op)
}

fn op(code: i64) -> RawCriterion {
    RawCriterion::connective(0, code)
}

fn attrs(pairs: &[(i64, i64)]) -> AttributeMap {
    pairs.iter().copied().collect()
}

#[test]
fn test_missing_attribute_reads_zero() {
    let t = tree(&[leaf(1, 0, EQUAL)]);
    assert_eq!(evaluate(&t, &attrs(&[])).status(), Status::Met);

    let t = tree(&[leaf(1, 0, GREATER)]);
    assert_eq!(evaluate(&t, &attrs(&[])).status(), Status::Unmet);
}

#[test]
fn test_and_counts_and_partial() {
    let t = tree(&[
        leaf(1, 10, GREATER_OR_EQUAL),
        leaf(2, 10, GREATER_OR_EQUAL),
        op(AND),
        leaf(3, 10, GREATER_OR_EQUAL),
        op(AND),
    ]);

    let all = evaluate(&t, &attrs(&[(1, 10), (2, 11), (3, 12)]));
    assert_eq!(all.status(), Status::Met);
    assert_eq!((all.met_count(), all.total_count()), (3, 3));

    let some = evaluate(&t, &attrs(&[(1, 10)]));
    assert_eq!(some.status(), Status::Partial);
    assert_eq!((some.met_count(), some.total_count()), (1, 3));

    let none = evaluate(&t, &attrs(&[]));
    assert_eq!(none.status(), Status::Unmet);
    assert_eq!((none.met_count(), none.total_count()), (0, 3));
}

#[test]
fn test_or_counts_as_one_requirement() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(OR), leaf(3, 1, EQUAL), op(OR)]);

    let met = evaluate(&t, &attrs(&[(3, 1)]));
    assert_eq!(met.status(), Status::Met);
    assert_eq!((met.met_count(), met.total_count()), (1, 1));

    let unmet = evaluate(&t, &attrs(&[]));
    assert_eq!(unmet.status(), Status::Unmet);
    assert_eq!((unmet.met_count(), unmet.total_count()), (0, 1));
}

#[test]
fn test_or_inside_and_counts_once() {
    let t = tree(&[
        leaf(1, 1, EQUAL),
        leaf(2, 1, EQUAL),
        op(OR),
        leaf(3, 1, EQUAL),
        op(AND),
    ]);
    let evaluated = evaluate(&t, &attrs(&[(1, 1), (2, 1)]));
    assert_eq!(evaluated.total_count(), 2);
    assert_eq!(evaluated.met_count(), 1);
    assert_eq!(evaluated.status(), Status::Partial);
}

#[test]
fn test_not_inverts_definite_child() {
    let t = tree(&[leaf(1, 1, EQUAL), op(NOT)]);
    let when_met = evaluate(&t, &attrs(&[(1, 1)]));
    assert_eq!(when_met.status(), Status::Unmet);
    assert_eq!(when_met.met_count(), 0);

    let when_unmet = evaluate(&t, &attrs(&[]));
    assert_eq!(when_unmet.status(), Status::Met);
    assert_eq!((when_unmet.met_count(), when_unmet.total_count()), (1, 1));
}

#[test]
fn test_not_over_partial_is_unknown() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(AND), op(NOT)]);
    let input = attrs(&[(1, 1)]);

    let conservative = Evaluator::new(UnknownPolicy::Conservative).evaluate(&t, &input);
    assert_eq!(conservative.status(), Status::Unknown);
    assert_eq!(conservative.met_count(), 0);
    assert_eq!(conservative.children()[0].status(), Status::Partial);

    let permissive = Evaluator::new(UnknownPolicy::Permissive).evaluate(&t, &input);
    assert_eq!(permissive.status(), Status::Unknown);
    assert_eq!(permissive.met_count(), 1);
}

#[test]
fn test_unknown_branch_satisfies_or_only_when_permissive() {
    // (NOT (1 AND 2)) OR 3
    let t = tree(&[
        leaf(1, 1, EQUAL),
        leaf(2, 1, EQUAL),
        op(AND),
        op(NOT),
        leaf(3, 1, EQUAL),
        op(OR),
    ]);
    let input = attrs(&[(1, 1)]);

    let conservative = Evaluator::new(UnknownPolicy::Conservative).evaluate(&t, &input);
    assert_eq!(conservative.status(), Status::Unmet);

    let permissive = Evaluator::new(UnknownPolicy::Permissive).evaluate(&t, &input);
    assert_eq!(permissive.status(), Status::Met);
}

#[test]
fn test_and_is_additive_over_nesting() {
    let a = leaf(1, 1, EQUAL);
    let b = leaf(2, 1, EQUAL);
    let c = leaf(3, 1, EQUAL);
    let nested = tree(&[a, b, op(AND), c, op(AND)]);

    let flat = TreeNode::and(vec![tree(&[a]), tree(&[b]), tree(&[c])]);
    let input = attrs(&[(1, 1), (3, 1)]);

    let nested = evaluate(&nested, &input);
    let flat = evaluate(&flat, &input);
    assert_eq!(nested.met_count(), flat.met_count());
    assert_eq!(nested.total_count(), flat.total_count());
    assert_eq!(nested.status(), flat.status());
}

#[test]
fn test_evaluation_leaves_input_untouched() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(OR)]);
    let before = t.clone();
    let evaluated = evaluate(&t, &attrs(&[(1, 1)]));
    assert_eq!(t, before);
    assert_eq!(t.status(), Status::Unknown);
    assert_eq!(evaluated.node_count(), t.node_count());
}

#[test]
fn test_state_and_function_checks() {
    let t = tree(&[
        RawCriterion::new(1, 389, 0b0110, FLAGS_SET),
        RawCriterion::new(2, 390, 0b0001, FLAGS_CLEAR),
        op(AND),
        RawCriterion::new(3, 9000, 2, POSSESSES),
        op(AND),
        RawCriterion::new(4, 9001, 0, LACKS),
        op(AND),
    ]);

    let met = evaluate(&t, &attrs(&[(389, 0b1110), (390, 0b1000), (9000, 2)]));
    assert_eq!(met.status(), Status::Met);

    let unmet = evaluate(&t, &attrs(&[(389, 0b0100), (390, 0b0001), (9000, 1), (9001, 1)]));
    assert_eq!(unmet.status(), Status::Unmet);
    assert_eq!(unmet.total_count(), 4);
}

#[test]
fn test_collect_unmet_leaves_under_and() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(AND), leaf(3, 1, EQUAL), op(AND)]);
    let evaluated = evaluate(&t, &attrs(&[(2, 1)]));
    let unmet = collect_unmet_conservative(&evaluated);

    let ids: Vec<i64> = unmet
        .iter()
        .map(|n| n.as_requirement().unwrap().attribute_id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_collect_unmet_or_reported_whole() {
    let t = tree(&[
        leaf(1, 1, EQUAL),
        leaf(2, 1, EQUAL),
        op(OR),
        leaf(3, 1, EQUAL),
        op(AND),
    ]);
    let evaluated = evaluate(&t, &attrs(&[]));
    let unmet = collect_unmet_conservative(&evaluated);

    assert_eq!(unmet.len(), 2);
    assert_eq!(unmet[0].operator(), Some(LogicalOp::Or));
    assert_eq!(unmet[0].children().len(), 2);
    assert_eq!(unmet[1].as_requirement().unwrap().attribute_id, 3);
}

#[test]
fn test_collect_unmet_met_or_contributes_nothing() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(OR)]);
    let evaluated = evaluate(&t, &attrs(&[(2, 1)]));
    assert!(collect_unmet_conservative(&evaluated).is_empty());
}

#[test]
fn test_collect_unmet_not_listed_without_recursing() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(OR), op(NOT)]);
    let evaluated = evaluate(&t, &attrs(&[(1, 1)]));
    let unmet = collect_unmet_conservative(&evaluated);
    assert_eq!(unmet.len(), 1);
    assert_eq!(unmet[0].operator(), Some(LogicalOp::Not));
}

#[test]
fn test_collect_unknown_not_depends_on_policy() {
    let t = tree(&[leaf(1, 1, EQUAL), leaf(2, 1, EQUAL), op(AND), op(NOT)]);
    let input = attrs(&[(1, 1)]);

    let conservative = Evaluator::new(UnknownPolicy::Conservative).evaluate(&t, &input);
    assert_eq!(collect_unmet(&conservative, UnknownPolicy::Conservative).len(), 1);

    let permissive = Evaluator::new(UnknownPolicy::Permissive).evaluate(&t, &input);
    assert!(collect_unmet(&permissive, UnknownPolicy::Permissive).is_empty());
}
