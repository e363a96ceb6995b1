//! Criteria pipeline: classify → bind → build → evaluate → collect.

pub mod binder;
pub mod builder;
pub mod classifier;
pub mod collector;
pub mod engine;
pub mod evaluator;
pub mod operators;
pub mod render;
pub mod tree;
pub mod types;

pub use binder::{bind, ModifierBinder};
pub use builder::{build, build_with_limit};
pub use classifier::{classify, Classifier};
pub use collector::{collect_unmet, collect_unmet_conservative};
pub use engine::{CriteriaEngine, Evaluation, EvaluationResult};
pub use evaluator::{evaluate, Evaluator};
pub use render::render_outline;
pub use tree::{GroupNode, NotNode, RequirementNode, Status, TreeNode};
pub use types::{
    criteria_from_json, ClassifiedNode, Comparator, LeafKind, LogicalOp, NodeKind, RawCriterion,
    Scope,
};
