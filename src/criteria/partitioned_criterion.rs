use crate::core::samples::SampleView;
use crate::criteria::CriterionError;
use crate::criteria::accumulators::{LogStatistic, WeightedStatAccumulator};

/// Side weight, relative to the node weight, below which a side is empty.
const NEGLIGIBLE_WEIGHT: f64 = 1e-12;

/// Sliding-window bookkeeping shared by every regression criterion.
///
/// Holds the statistics of the bound node window `[start, end)` and of its
/// left `[start, pos)` and right `[pos, end)` partitions. Only the left side
/// is ever walked; the right side is always derived as `total − left`, so
/// `left + right == total` holds after every call.
///
/// Moving the cut walks whichever of `[pos, new_pos)` or `[new_pos, end)` is
/// shorter, which keeps a left-to-right sweep over the window linear in its
/// size.
#[derive(Debug, Clone)]
pub struct PartitionedCriterion {
    n_outputs: usize,

    start: usize,
    pos: usize,
    end: usize,

    weighted_n_samples: f64,

    total: WeightedStatAccumulator,
    left: WeightedStatAccumulator,
    right: WeightedStatAccumulator,

    samples_visited: u64,
}

impl PartitionedCriterion {
    pub fn new(
        n_outputs: usize,
        n_samples: usize,
        log_statistic: LogStatistic,
    ) -> Result<Self, CriterionError> {
        if n_outputs == 0 {
            return Err(CriterionError::InvalidParameter(
                "n_outputs must be > 0".into(),
            ));
        }
        log::debug!(
            "allocating partitioned criterion: n_outputs={n_outputs}, n_samples={n_samples}, \
             log_statistic={log_statistic:?}"
        );
        Ok(Self {
            n_outputs,
            start: 0,
            pos: 0,
            end: 0,
            weighted_n_samples: 0.0,
            total: WeightedStatAccumulator::new(n_outputs, log_statistic)?,
            left: WeightedStatAccumulator::new(n_outputs, log_statistic)?,
            right: WeightedStatAccumulator::new(n_outputs, log_statistic)?,
            samples_visited: 0,
        })
    }

    /// Binds to the window `[start, end)` of `samples` and resets the cut to `start`.
    ///
    /// `weighted_n_samples` is the total weight of the whole training set; it
    /// only scales [`impurity_improvement`](Self::impurity_improvement).
    pub fn init(
        &mut self,
        samples: &SampleView<'_>,
        weighted_n_samples: f64,
        start: usize,
        end: usize,
    ) -> Result<(), CriterionError> {
        debug_assert!(start <= end && end <= samples.len());

        if samples.n_outputs() != self.n_outputs {
            let n_outputs = samples.n_outputs();
            log::debug!(
                "re-sizing criterion buffers from {} to {n_outputs} outputs",
                self.n_outputs
            );
            self.total.resize(n_outputs)?;
            self.left.resize(n_outputs)?;
            self.right.resize(n_outputs)?;
            self.n_outputs = n_outputs;
        }
        self.start = start;
        self.end = end;
        self.weighted_n_samples = weighted_n_samples;

        self.total.clear();
        for p in start..end {
            let i = samples.sample_at(p);
            self.total.add(samples.weight(i), samples.row(i));
        }
        self.samples_visited += (end - start) as u64;

        log::trace!(
            "criterion bound to window [{start}, {end}) with node weight {}",
            self.total.weighted_n()
        );

        self.reset();
        Ok(())
    }

    /// Puts the cut at `start`: left empty, right equal to the node.
    pub fn reset(&mut self) {
        self.pos = self.start;
        self.left.clear();
        self.right.copy_from(&self.total);
    }

    /// Puts the cut at `end`: left equal to the node, right empty.
    pub fn reverse_reset(&mut self) {
        self.pos = self.end;
        self.left.copy_from(&self.total);
        self.right.clear();
    }

    /// Moves the cut to `new_pos`, with `start <= new_pos <= end`.
    pub fn update(&mut self, samples: &SampleView<'_>, new_pos: usize) {
        debug_assert!(self.start <= new_pos && new_pos <= self.end);

        if new_pos == self.start {
            self.reset();
            return;
        }
        if new_pos == self.end {
            self.reverse_reset();
            return;
        }

        if new_pos >= self.pos && new_pos - self.pos <= self.end - new_pos {
            for p in self.pos..new_pos {
                let i = samples.sample_at(p);
                self.left.add(samples.weight(i), samples.row(i));
            }
            self.samples_visited += (new_pos - self.pos) as u64;
        } else {
            self.reverse_reset();
            for p in (new_pos..self.end).rev() {
                let i = samples.sample_at(p);
                self.left.remove(samples.weight(i), samples.row(i));
            }
            self.samples_visited += (self.end - new_pos) as u64;
        }

        self.right.set_difference(&self.total, &self.left);
        self.pos = new_pos;
        self.snap_negligible_sides();
    }

    /// A side holding only zero-weight samples can be left with rounding
    /// residue from the subtractions; make it exactly empty.
    fn snap_negligible_sides(&mut self) {
        let tolerance = NEGLIGIBLE_WEIGHT * self.total.weighted_n();
        if self.left.weighted_n().abs() <= tolerance {
            self.left.clear();
            self.right.copy_from(&self.total);
        } else if self.right.weighted_n().abs() <= tolerance {
            self.right.clear();
            self.left.copy_from(&self.total);
        }
    }

    /// Impurity decrease of a split, weighted by the node's share of the
    /// training set so values compare across nodes.
    pub fn impurity_improvement(
        &self,
        impurity_parent: f64,
        impurity_left: f64,
        impurity_right: f64,
    ) -> f64 {
        let weighted_n_node = self.total.weighted_n();
        (weighted_n_node / self.weighted_n_samples)
            * (impurity_parent
                - self.right.weighted_n() / weighted_n_node * impurity_right
                - self.left.weighted_n() / weighted_n_node * impurity_left)
    }

    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn weighted_n_samples(&self) -> f64 {
        self.weighted_n_samples
    }

    #[inline]
    pub fn weighted_n_node_samples(&self) -> f64 {
        self.total.weighted_n()
    }

    #[inline]
    pub fn weighted_n_left(&self) -> f64 {
        self.left.weighted_n()
    }

    #[inline]
    pub fn weighted_n_right(&self) -> f64 {
        self.right.weighted_n()
    }

    #[inline]
    pub fn total(&self) -> &WeightedStatAccumulator {
        &self.total
    }

    #[inline]
    pub fn left(&self) -> &WeightedStatAccumulator {
        &self.left
    }

    #[inline]
    pub fn right(&self) -> &WeightedStatAccumulator {
        &self.right
    }

    /// Samples walked by `init` and `update` since construction.
    #[inline]
    pub fn samples_visited(&self) -> u64 {
        self.samples_visited
    }
}
