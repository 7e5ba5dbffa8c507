use crate::criteria::accumulators::LogStatistic;
use crate::criteria::error::{CriterionError, resize_buffer, zeroed_buffer};

/// Sufficient statistics of a weighted set of target rows.
///
/// Tracks, per output `k`, `Σ w·y[k]` and the configured log statistic, plus
/// the scalar `Σ_k Σ w·y[k]²` and the total weight. Samples can be added and
/// removed one at a time; zero-weight samples leave every field untouched.
#[derive(Debug, Clone)]
pub struct WeightedStatAccumulator {
    sum: Vec<f64>,
    log_sum: Vec<f64>,
    sq_sum: f64,
    weighted_n: f64,
    log_statistic: LogStatistic,
}

impl WeightedStatAccumulator {
    pub fn new(n_outputs: usize, log_statistic: LogStatistic) -> Result<Self, CriterionError> {
        Ok(Self {
            sum: zeroed_buffer(n_outputs)?,
            log_sum: zeroed_buffer(n_outputs)?,
            sq_sum: 0.0,
            weighted_n: 0.0,
            log_statistic,
        })
    }

    /// Re-sizes the per-output buffers and clears them.
    pub fn resize(&mut self, n_outputs: usize) -> Result<(), CriterionError> {
        resize_buffer(&mut self.sum, n_outputs)?;
        resize_buffer(&mut self.log_sum, n_outputs)?;
        self.sq_sum = 0.0;
        self.weighted_n = 0.0;
        Ok(())
    }

    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.sum.len()
    }

    #[inline]
    pub fn log_statistic(&self) -> LogStatistic {
        self.log_statistic
    }

    #[inline]
    pub fn sum(&self) -> &[f64] {
        &self.sum
    }

    #[inline]
    pub fn log_sum(&self) -> &[f64] {
        &self.log_sum
    }

    #[inline]
    pub fn sq_sum(&self) -> f64 {
        self.sq_sum
    }

    #[inline]
    pub fn weighted_n(&self) -> f64 {
        self.weighted_n
    }

    pub fn clear(&mut self) {
        self.sum.fill(0.0);
        self.log_sum.fill(0.0);
        self.sq_sum = 0.0;
        self.weighted_n = 0.0;
    }

    /// Overwrites `self` with `other`. Both must have the same number of outputs.
    pub fn copy_from(&mut self, other: &WeightedStatAccumulator) {
        self.sum.copy_from_slice(&other.sum);
        self.log_sum.copy_from_slice(&other.log_sum);
        self.sq_sum = other.sq_sum;
        self.weighted_n = other.weighted_n;
    }

    #[inline]
    pub fn add(&mut self, w: f64, row: &[f64]) {
        if w == 0.0 {
            return;
        }
        let track_logs = self.log_statistic.is_enabled();
        for (k, &y) in row.iter().enumerate() {
            let wy = w * y;
            self.sum[k] += wy;
            self.sq_sum += wy * y;
            if track_logs {
                self.log_sum[k] += self.log_statistic.contribution(w, y);
            }
        }
        self.weighted_n += w;
    }

    #[inline]
    pub fn remove(&mut self, w: f64, row: &[f64]) {
        if w == 0.0 {
            return;
        }
        let track_logs = self.log_statistic.is_enabled();
        for (k, &y) in row.iter().enumerate() {
            let wy = w * y;
            self.sum[k] -= wy;
            self.sq_sum -= wy * y;
            if track_logs {
                self.log_sum[k] -= self.log_statistic.contribution(w, y);
            }
        }
        self.weighted_n -= w;
    }

    /// Sets `self` to `total − part`, field by field.
    pub fn set_difference(
        &mut self,
        total: &WeightedStatAccumulator,
        part: &WeightedStatAccumulator,
    ) {
        for k in 0..self.sum.len() {
            self.sum[k] = total.sum[k] - part.sum[k];
            self.log_sum[k] = total.log_sum[k] - part.log_sum[k];
        }
        self.sq_sum = total.sq_sum - part.sq_sum;
        self.weighted_n = total.weighted_n - part.weighted_n;
    }
}
