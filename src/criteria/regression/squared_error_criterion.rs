use crate::criteria::accumulators::LogStatistic;
use crate::criteria::regression::{proxy_term, variance_impurity};
use crate::criteria::{ChildrenImpurity, Criterion, CriterionError, PartitionedCriterion};

/// Weighted variance (mean squared error) criterion.
///
/// Impurity is the within-set variance averaged over outputs, and the node
/// value is the weighted mean. Cancellation can drive a variance slightly
/// below zero; by default such values are clamped to zero.
#[derive(Debug, Clone)]
pub struct SquaredErrorCriterion {
    partition: PartitionedCriterion,
    clamp_negative_impurity: bool,
}

impl SquaredErrorCriterion {
    pub fn new(n_outputs: usize, n_samples: usize) -> Result<Self, CriterionError> {
        Ok(Self {
            partition: PartitionedCriterion::new(n_outputs, n_samples, LogStatistic::Disabled)?,
            clamp_negative_impurity: true,
        })
    }

    pub fn with_clamping(mut self, clamp_negative_impurity: bool) -> Self {
        self.clamp_negative_impurity = clamp_negative_impurity;
        self
    }

    #[inline]
    fn finish(&self, impurity: f64) -> f64 {
        if self.clamp_negative_impurity {
            impurity.max(0.0)
        } else {
            impurity
        }
    }
}

impl Criterion for SquaredErrorCriterion {
    fn partition(&self) -> &PartitionedCriterion {
        &self.partition
    }

    fn partition_mut(&mut self) -> &mut PartitionedCriterion {
        &mut self.partition
    }

    fn name(&self) -> &'static str {
        "squared-error"
    }

    fn node_impurity(&self) -> f64 {
        let total = self.partition.total();
        self.finish(variance_impurity(
            total.sq_sum(),
            total.sum(),
            total.weighted_n(),
        ))
    }

    fn children_impurity(&self) -> ChildrenImpurity {
        let left = self.partition.left();
        let right = self.partition.right();
        ChildrenImpurity::new(
            self.finish(variance_impurity(left.sq_sum(), left.sum(), left.weighted_n())),
            self.finish(variance_impurity(
                right.sq_sum(),
                right.sum(),
                right.weighted_n(),
            )),
        )
    }

    fn node_value(&self, dest: &mut [f64]) {
        let total = self.partition.total();
        let weighted_n = total.weighted_n();
        for (d, s) in dest.iter_mut().zip(total.sum()) {
            *d = s / weighted_n;
        }
    }

    fn proxy_impurity_improvement(&self) -> f64 {
        let left = self.partition.left();
        let right = self.partition.right();
        proxy_term(left.sum(), left.weighted_n()) + proxy_term(right.sum(), right.weighted_n())
    }
}
