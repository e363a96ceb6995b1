//! Filtering pipelines: apply the criteria engine to whole item lists.

pub mod batch;

pub use batch::{evaluate_batch, retain_satisfiable, BatchResult};
