//! Malformed postfix stream errors.

use super::error_code::{self, ReqtreeErrorCode};

/// The criteria list cannot represent a single boolean expression.
///
/// Raised only by tree construction. Fatal for the one list being built;
/// callers skip that item rather than aborting a whole filter run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedCriteriaError {
    #[error("{operator} at position {position} needs {needed} operand(s), found {available}")]
    StackUnderflow {
        operator: &'static str,
        position: usize,
        needed: usize,
        available: usize,
    },

    #[error("criteria stream left {remaining} expressions on the stack, expected exactly 1")]
    UnbalancedStack { remaining: usize },

    #[error("expression at position {position} nests {depth} levels deep, limit is {limit}")]
    TooDeep {
        position: usize,
        depth: usize,
        limit: usize,
    },
}

impl ReqtreeErrorCode for MalformedCriteriaError {
    fn error_code(&self) -> &'static str {
        error_code::MALFORMED_CRITERIA
    }
}
