pub mod accumulators;
mod criterion;
mod error;
mod partitioned_criterion;
pub mod regression;

pub use criterion::{ChildrenImpurity, Criterion, LogChildrenImpurity};
pub use error::CriterionError;
pub use partitioned_criterion::PartitionedCriterion;
