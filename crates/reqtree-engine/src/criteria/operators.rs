//! Operator code tables.
//!
//! The codes are fixed by the game data. Three bands matter to the engine:
//! the dense comparison band, the connectives (only meaningful with zero
//! operands), and the target scope modifier. State and function checks add
//! two small tables on top. Anything else is classified best-effort.

use std::ops::RangeInclusive;

use super::types::{Comparator, LogicalOp};

pub const EQUAL: i64 = 0;
pub const GREATER: i64 = 1;
pub const GREATER_OR_EQUAL: i64 = 2;
pub const LESS: i64 = 3;
pub const LESS_OR_EQUAL: i64 = 4;
pub const NOT_EQUAL: i64 = 5;

pub const OR: i64 = 20;
pub const AND: i64 = 21;
pub const NOT: i64 = 22;

/// Next comparison or function check applies to the action's target.
pub const TARGET_MODIFIER: i64 = 26;

/// Bitmask attribute `value1` has every bit of mask `value2` set.
pub const FLAGS_SET: i64 = 40;
/// Bitmask attribute `value1` has no bit of mask `value2` set.
pub const FLAGS_CLEAR: i64 = 41;

/// Caller-computed count `value1` (perk, item, nano) is at least `max(value2, 1)`.
pub const POSSESSES: i64 = 50;
/// Caller-computed count `value1` is zero.
pub const LACKS: i64 = 51;

pub const COMPARISON_BAND: RangeInclusive<i64> = EQUAL..=NOT_EQUAL;

/// Comparison band, indexed by `code - EQUAL`.
const COMPARATORS: [Comparator; 6] = [
    Comparator::Equal,
    Comparator::Greater,
    Comparator::GreaterOrEqual,
    Comparator::Less,
    Comparator::LessOrEqual,
    Comparator::NotEqual,
];

const CONNECTIVES: [(i64, LogicalOp); 3] = [
    (OR, LogicalOp::Or),
    (AND, LogicalOp::And),
    (NOT, LogicalOp::Not),
];

const STATE_CHECKS: [(i64, Comparator); 2] = [
    (FLAGS_SET, Comparator::FlagsSet),
    (FLAGS_CLEAR, Comparator::FlagsClear),
];

/// Comparator for a code inside the comparison band.
pub fn comparator_for(code: i64) -> Option<Comparator> {
    if COMPARISON_BAND.contains(&code) {
        Some(COMPARATORS[(code - EQUAL) as usize])
    } else {
        None
    }
}

pub fn connective_for(code: i64) -> Option<LogicalOp> {
    CONNECTIVES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, op)| *op)
}

pub fn state_check_for(code: i64) -> Option<Comparator> {
    STATE_CHECKS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, cmp)| *cmp)
}

pub fn is_function_check(code: i64) -> bool {
    code == POSSESSES || code == LACKS
}

/// Fold an unrecognised code into the comparison band.
pub fn best_effort_comparator(code: i64) -> Comparator {
    let width = COMPARATORS.len() as i64;
    COMPARATORS[(code - EQUAL).rem_euclid(width) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_band_is_dense() {
        for code in COMPARISON_BAND {
            assert!(comparator_for(code).is_some(), "code {code} missing");
        }
        assert_eq!(comparator_for(NOT_EQUAL + 1), None);
        assert_eq!(comparator_for(-1), None);
    }

    #[test]
    fn test_best_effort_comparator_matches_band() {
        assert_eq!(best_effort_comparator(GREATER), Comparator::Greater);
        assert_eq!(best_effort_comparator(8), Comparator::GreaterOrEqual);
        assert_eq!(best_effort_comparator(-1), Comparator::NotEqual);
    }

    #[test]
    fn test_connective_table() {
        assert_eq!(connective_for(OR), Some(LogicalOp::Or));
        assert_eq!(connective_for(AND), Some(LogicalOp::And));
        assert_eq!(connective_for(NOT), Some(LogicalOp::Not));
        assert_eq!(connective_for(TARGET_MODIFIER), None);
    }
}
