use crate::criteria::accumulators::LogStatistic;
use crate::criteria::regression::{proxy_term, variance_impurity};
use crate::criteria::{ChildrenImpurity, Criterion, CriterionError, PartitionedCriterion};

/// Experimental log-linked criterion for positive, multiplicative targets.
///
/// Alongside the variance statistics it accumulates `Σ ln(w·y)` per output
/// and ranks cuts with the variance formulas evaluated on those log sums.
/// The node value is `ln(Σ w·y) / Σ w`. Targets of samples with non-zero
/// weight must be strictly positive.
///
/// See [`GammaDevianceCriterion`](super::GammaDevianceCriterion) for a
/// deviance-consistent alternative.
#[derive(Debug, Clone)]
pub struct LogLinkedCriterion {
    partition: PartitionedCriterion,
}

impl LogLinkedCriterion {
    pub fn new(n_outputs: usize, n_samples: usize) -> Result<Self, CriterionError> {
        Ok(Self {
            partition: PartitionedCriterion::new(
                n_outputs,
                n_samples,
                LogStatistic::LogOfWeighted,
            )?,
        })
    }
}

impl Criterion for LogLinkedCriterion {
    fn partition(&self) -> &PartitionedCriterion {
        &self.partition
    }

    fn partition_mut(&mut self) -> &mut PartitionedCriterion {
        &mut self.partition
    }

    fn name(&self) -> &'static str {
        "log-linked"
    }

    fn node_impurity(&self) -> f64 {
        let total = self.partition.total();
        variance_impurity(total.sq_sum(), total.log_sum(), total.weighted_n())
    }

    /// `left`/`right` are the plain variances; the log pair substitutes the
    /// log sums for the sums and is the pair this criterion ranks by.
    fn children_impurity(&self) -> ChildrenImpurity {
        let left = self.partition.left();
        let right = self.partition.right();
        ChildrenImpurity::new(
            variance_impurity(left.sq_sum(), left.sum(), left.weighted_n()),
            variance_impurity(right.sq_sum(), right.sum(), right.weighted_n()),
        )
        .with_log(
            variance_impurity(left.sq_sum(), left.log_sum(), left.weighted_n()),
            variance_impurity(right.sq_sum(), right.log_sum(), right.weighted_n()),
        )
    }

    fn node_value(&self, dest: &mut [f64]) {
        let total = self.partition.total();
        let weighted_n = total.weighted_n();
        for (d, s) in dest.iter_mut().zip(total.sum()) {
            *d = s.ln() / weighted_n;
        }
    }

    fn proxy_impurity_improvement(&self) -> f64 {
        let left = self.partition.left();
        let right = self.partition.right();
        (proxy_term(left.log_sum(), left.weighted_n())
            + proxy_term(right.log_sum(), right.weighted_n()))
            / self.partition.n_outputs() as f64
    }
}
