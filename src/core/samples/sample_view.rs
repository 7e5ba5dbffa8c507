use crate::core::samples::TargetMatrix;
use crate::criteria::CriterionError;

/// Read-only view of the data a criterion walks over.
///
/// Validation happens once here; criteria index through the view without
/// re-checking bounds or weights on every call.
#[derive(Debug, Clone, Copy)]
pub struct SampleView<'a> {
    targets: TargetMatrix<'a>,
    sample_weight: Option<&'a [f64]>,
    sample_order: &'a [usize],
}

impl<'a> SampleView<'a> {
    pub fn new(
        targets: TargetMatrix<'a>,
        sample_weight: Option<&'a [f64]>,
        sample_order: &'a [usize],
    ) -> Result<Self, CriterionError> {
        let n_samples = targets.n_samples();

        if let Some(weights) = sample_weight {
            if weights.len() != n_samples {
                return Err(CriterionError::InvalidDataset(format!(
                    "expected {n_samples} sample weights, got {}",
                    weights.len()
                )));
            }
            if let Some(bad) = weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
                return Err(CriterionError::InvalidDataset(format!(
                    "weight of sample {bad} is negative or not finite"
                )));
            }
        }

        if let Some(bad) = sample_order.iter().find(|&&i| i >= n_samples) {
            return Err(CriterionError::InvalidDataset(format!(
                "sample index {bad} out of range for {n_samples} samples"
            )));
        }

        Ok(Self {
            targets,
            sample_weight,
            sample_order,
        })
    }

    #[inline]
    pub fn targets(&self) -> TargetMatrix<'a> {
        self.targets
    }

    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.targets.n_outputs()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sample_order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sample_order.is_empty()
    }

    /// Raw sample index stored at position `p` of the sample order.
    #[inline]
    pub fn sample_at(&self, p: usize) -> usize {
        self.sample_order[p]
    }

    /// Weight of raw sample `i`; 1 when no weights were given.
    #[inline]
    pub fn weight(&self, i: usize) -> f64 {
        match self.sample_weight {
            Some(w) => w[i],
            None => 1.0,
        }
    }

    #[inline]
    pub fn row(&self, i: usize) -> &'a [f64] {
        self.targets.row(i)
    }

    /// Total weight of every sample in the order, the denominator that makes
    /// impurity improvements comparable across nodes.
    pub fn weighted_n_samples(&self) -> f64 {
        match self.sample_weight {
            Some(w) => self.sample_order.iter().map(|&i| w[i]).sum(),
            None => self.sample_order.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETS: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

    #[test]
    fn missing_weights_mean_unit_weight() {
        let order = [3, 2, 1, 0];
        let view = SampleView::new(TargetMatrix::new(&TARGETS, 1).unwrap(), None, &order).unwrap();
        assert_eq!(view.weight(2), 1.0);
        assert_eq!(view.sample_at(0), 3);
        assert_eq!(view.row(view.sample_at(0)), &[4.0]);
        assert_eq!(view.weighted_n_samples(), 4.0);
    }

    #[test]
    fn weighted_total_follows_order() {
        let weights = [1.0, 1.0, 1.0, 2.0];
        let order = [0, 3];
        let view = SampleView::new(
            TargetMatrix::new(&TARGETS, 1).unwrap(),
            Some(&weights[..]),
            &order,
        )
        .unwrap();
        assert_eq!(view.weighted_n_samples(), 3.0);
    }

    #[test]
    fn rejects_bad_weights() {
        let order = [0, 1, 2, 3];
        let targets = TargetMatrix::new(&TARGETS, 1).unwrap();
        assert!(SampleView::new(targets, Some(&[1.0, 1.0][..]), &order).is_err());
        assert!(SampleView::new(targets, Some(&[1.0, -1.0, 1.0, 1.0][..]), &order).is_err());
        let infinite = [1.0, f64::INFINITY, 1.0, 1.0];
        assert!(SampleView::new(targets, Some(&infinite[..]), &order).is_err());
    }

    #[test]
    fn rejects_out_of_range_order() {
        let targets = TargetMatrix::new(&TARGETS, 1).unwrap();
        let err = SampleView::new(targets, None, &[0, 4]).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
