use crate::core::samples::{SampleView, TargetMatrix};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Owned targets, weights and sample order that hand out a [`SampleView`].
#[derive(Debug, Clone)]
pub struct OwnedSamples {
    pub targets: Vec<f64>,
    pub n_outputs: usize,
    pub weights: Option<Vec<f64>>,
    pub order: Vec<usize>,
}

impl OwnedSamples {
    /// Samples in their natural order.
    pub fn new(targets: Vec<f64>, n_outputs: usize, weights: Option<Vec<f64>>) -> Self {
        let n_samples = targets.len() / n_outputs;
        Self {
            targets,
            n_outputs,
            weights,
            order: (0..n_samples).collect(),
        }
    }

    /// Single output `[1, 2, 3, 4]`, unweighted.
    pub fn ramp() -> Self {
        Self::new(vec![1.0, 2.0, 3.0, 4.0], 1, None)
    }

    /// [`ramp`](Self::ramp) with the last sample weighted twice.
    pub fn weighted_ramp() -> Self {
        Self::new(vec![1.0, 2.0, 3.0, 4.0], 1, Some(vec![1.0, 1.0, 1.0, 2.0]))
    }

    /// Seeded random samples in shuffled order.
    ///
    /// Weighted datasets include some zero weights. Positive datasets draw
    /// targets from `[0.5, 10)`, others from `[-5, 5)`.
    pub fn random(
        seed: u64,
        n_samples: usize,
        n_outputs: usize,
        weighted: bool,
        positive: bool,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let targets = (0..n_samples * n_outputs)
            .map(|_| {
                if positive {
                    rng.random_range(0.5..10.0)
                } else {
                    rng.random_range(-5.0..5.0)
                }
            })
            .collect();

        let weights = weighted.then(|| {
            (0..n_samples)
                .map(|_| {
                    if rng.random_bool(0.1) {
                        0.0
                    } else {
                        rng.random_range(0.1..3.0)
                    }
                })
                .collect()
        });

        let mut order: Vec<usize> = (0..n_samples).collect();
        order.shuffle(&mut rng);

        Self {
            targets,
            n_outputs,
            weights,
            order,
        }
    }

    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    pub fn view(&self) -> SampleView<'_> {
        let targets =
            TargetMatrix::new(&self.targets, self.n_outputs).expect("fixture targets are valid");
        SampleView::new(targets, self.weights.as_deref(), &self.order)
            .expect("fixture samples are valid")
    }
}
