//! # reqtree-engine
//!
//! Requirement criteria engine for character planning.
//!
//! Items, nanoprograms, implants and symbiants carry their requirements as a
//! flat postfix list of primitive criteria. This crate turns such a list into
//! an expression tree and evaluates it against a character's attributes:
//!
//! 1. `criteria::classifier`: record → classified node with a description
//! 2. `criteria::binder`: attaches target scope modifiers to the next leaf
//! 3. `criteria::builder`: postfix stack machine, OR chains flattened
//! 4. `criteria::evaluator`: bottom-up tri-state status with met/total counts
//! 5. `criteria::collector`: minimal list of unmet requirements
//!
//! `criteria::engine::CriteriaEngine` composes the pipeline and
//! `filter` applies it to whole lists of items.
//!
//! ```
//! use reqtree_core::types::AttributeMap;
//! use reqtree_engine::criteria::{operators, CriteriaEngine, RawCriterion};
//!
//! let criteria = [
//!     RawCriterion::new(1, 368, 1, operators::EQUAL),
//!     RawCriterion::new(2, 368, 2, operators::EQUAL),
//!     RawCriterion::connective(3, operators::OR),
//! ];
//! let mut attrs = AttributeMap::default();
//! attrs.insert(368, 2);
//!
//! let engine = CriteriaEngine::default();
//! let evaluation = engine.evaluate(&criteria, &attrs).unwrap();
//! assert!(evaluation.result.can_satisfy);
//! ```

pub mod criteria;
pub mod filter;

pub use criteria::{
    CriteriaEngine, Evaluation, EvaluationResult, RawCriterion, Status, TreeNode,
};
pub use filter::{evaluate_batch, retain_satisfiable, BatchResult};
