/// What the logarithm channel of a [`WeightedStatAccumulator`] collects.
///
/// [`WeightedStatAccumulator`]: super::WeightedStatAccumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogStatistic {
    /// No logarithms are taken; the log sums stay at zero.
    #[default]
    Disabled,
    /// `ln(w·y)` per sample.
    LogOfWeighted,
    /// `w·ln(y)` per sample.
    WeightedLog,
}

impl LogStatistic {
    /// Contribution of one sample with weight `w > 0` and target `y`.
    #[inline]
    pub fn contribution(self, w: f64, y: f64) -> f64 {
        match self {
            LogStatistic::Disabled => 0.0,
            LogStatistic::LogOfWeighted => (w * y).ln(),
            LogStatistic::WeightedLog => w * y.ln(),
        }
    }

    #[inline]
    pub fn is_enabled(self) -> bool {
        self != LogStatistic::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contributions_differ_by_where_weight_goes() {
        let y = std::f64::consts::E;
        assert_eq!(LogStatistic::Disabled.contribution(2.0, y), 0.0);
        let log_of_weighted = LogStatistic::LogOfWeighted.contribution(2.0, y);
        assert!((log_of_weighted - (1.0 + 2f64.ln())).abs() < 1e-12);
        assert!((LogStatistic::WeightedLog.contribution(2.0, y) - 2.0).abs() < 1e-12);
    }
}
