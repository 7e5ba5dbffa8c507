use crate::criteria::accumulators::{LogStatistic, WeightedStatAccumulator};
use crate::criteria::{ChildrenImpurity, Criterion, CriterionError, PartitionedCriterion};

/// Half Gamma deviance criterion.
///
/// The impurity of a set is its mean half Gamma deviance around its own
/// weighted mean `μ`: `ln(μ) − Σ w·ln(y) / Σ w`, averaged over outputs. It is
/// non-negative, so values below zero are cancellation error and clamped.
/// Targets of samples with non-zero weight must be strictly positive.
#[derive(Debug, Clone)]
pub struct GammaDevianceCriterion {
    partition: PartitionedCriterion,
}

impl GammaDevianceCriterion {
    pub fn new(n_outputs: usize, n_samples: usize) -> Result<Self, CriterionError> {
        Ok(Self {
            partition: PartitionedCriterion::new(
                n_outputs,
                n_samples,
                LogStatistic::WeightedLog,
            )?,
        })
    }
}

fn half_deviance(stats: &WeightedStatAccumulator) -> f64 {
    let weighted_n = stats.weighted_n();
    if weighted_n <= 0.0 {
        return 0.0;
    }
    let deviance: f64 = stats
        .sum()
        .iter()
        .zip(stats.log_sum())
        .map(|(s, l)| (s / weighted_n).ln() - l / weighted_n)
        .sum();
    (deviance / stats.n_outputs() as f64).max(0.0)
}

/// `Σ_k w·ln(sum[k] / w)`, the cut-dependent part of `w·half_deviance`.
fn weighted_log_mean(stats: &WeightedStatAccumulator) -> f64 {
    let weighted_n = stats.weighted_n();
    if weighted_n <= 0.0 {
        return 0.0;
    }
    stats
        .sum()
        .iter()
        .map(|s| weighted_n * (s / weighted_n).ln())
        .sum()
}

impl Criterion for GammaDevianceCriterion {
    fn partition(&self) -> &PartitionedCriterion {
        &self.partition
    }

    fn partition_mut(&mut self) -> &mut PartitionedCriterion {
        &mut self.partition
    }

    fn name(&self) -> &'static str {
        "gamma-deviance"
    }

    fn node_impurity(&self) -> f64 {
        half_deviance(self.partition.total())
    }

    fn children_impurity(&self) -> ChildrenImpurity {
        ChildrenImpurity::new(
            half_deviance(self.partition.left()),
            half_deviance(self.partition.right()),
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
        -(weighted_log_mean(self.partition.left()) + weighted_log_mean(self.partition.right()))
            / self.partition.n_outputs() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{OwnedSamples, reference_gamma_deviance};

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps * (1.0 + a.abs().max(b.abs()))
    }

    fn bound(data: &OwnedSamples) -> GammaDevianceCriterion {
        let view = data.view();
        let mut c = GammaDevianceCriterion::new(data.n_outputs(), view.len()).unwrap();
        c.init(&view, view.weighted_n_samples(), 0, view.len()).unwrap();
        c
    }

    #[test]
    fn constant_targets_are_pure() {
        let data = OwnedSamples::new(vec![3.0; 6], 1, None);
        let c = bound(&data);
        assert!(c.node_impurity().abs() < 1e-12);
        let mut value = [0.0];
        c.node_value(&mut value);
        assert!(approx_eq(value[0], 3.0, EPS));
    }

    #[test]
    fn ramp_split_in_half() {
        let data = OwnedSamples::ramp();
        let view = data.view();
        let mut c = bound(&data);

        let parent = 2.5f64.ln() - (2f64.ln() + 3f64.ln() + 4f64.ln()) / 4.0;
        assert!(approx_eq(c.node_impurity(), parent, EPS));

        c.update(&view, 2);
        let children = c.children_impurity();
        assert!(approx_eq(children.left, 1.5f64.ln() - 2f64.ln() / 2.0, EPS));
        assert!(approx_eq(children.right, 3.5f64.ln() - 12f64.ln() / 2.0, EPS));
        assert!(children.left >= 0.0 && children.right >= 0.0);
    }

    #[test]
    fn matches_direct_deviance_on_random_data() {
        let data = OwnedSamples::random(17, 40, 2, true, true);
        let view = data.view();
        let mut c = bound(&data);
        assert!(approx_eq(c.node_impurity(), reference_gamma_deviance(&view, 0, 40), 1e-8));

        for pos in [0, 9, 31, 20, 40, 1] {
            c.update(&view, pos);
            let children = c.children_impurity();
            assert!(approx_eq(children.left, reference_gamma_deviance(&view, 0, pos), 1e-8));
            assert!(approx_eq(children.right, reference_gamma_deviance(&view, pos, 40), 1e-8));
        }
    }

    #[test]
    fn proxy_orders_cuts_like_true_improvement() {
        for (seed, weighted) in [(31, false), (32, true)] {
            let data = OwnedSamples::random(seed, 30, 3, weighted, true);
            let view = data.view();
            let mut c = bound(&data);
            let parent = c.node_impurity();

            let mut scored = Vec::new();
            for pos in 0..=30 {
                c.update(&view, pos);
                let children = c.children_impurity();
                scored.push((
                    c.proxy_impurity_improvement(),
                    c.impurity_improvement(parent, children.left, children.right),
                ));
            }

            for &(proxy_a, true_a) in &scored {
                for &(proxy_b, true_b) in &scored {
                    if (true_a - true_b).abs() > 1e-9 {
                        assert_eq!(proxy_a > proxy_b, true_a > true_b);
                    }
                }
            }
        }
    }

    #[test]
    fn empty_left_after_backward_return_has_zero_impurity() {
        for seed in 0..40 {
            let data = OwnedSamples::random(seed, 50, 3, true, true);
            let view = data.view();
            let mut c = bound(&data);

            c.update(&view, 40);
            c.update(&view, 0);
            assert_eq!(c.partition().weighted_n_left(), 0.0);
            let children = c.children_impurity();
            assert_eq!(children.left, 0.0);
            assert!(approx_eq(children.right, c.node_impurity(), EPS));
        }
    }
}
