//! Brute-force statistics recomputed from scratch over a window of positions.

use crate::core::samples::SampleView;
use crate::criteria::accumulators::LogStatistic;

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceStats {
    pub sum: Vec<f64>,
    pub log_sum: Vec<f64>,
    pub sq_sum: f64,
    pub weighted_n: f64,
}

pub fn reference_stats(
    view: &SampleView<'_>,
    from: usize,
    to: usize,
    log_statistic: LogStatistic,
) -> ReferenceStats {
    let n_outputs = view.n_outputs();
    let mut stats = ReferenceStats {
        sum: vec![0.0; n_outputs],
        log_sum: vec![0.0; n_outputs],
        sq_sum: 0.0,
        weighted_n: 0.0,
    };
    for p in from..to {
        let i = view.sample_at(p);
        let w = view.weight(i);
        if w == 0.0 {
            continue;
        }
        for (k, &y) in view.row(i).iter().enumerate() {
            stats.sum[k] += w * y;
            stats.sq_sum += w * y * y;
            stats.log_sum[k] += match log_statistic {
                LogStatistic::Disabled => 0.0,
                LogStatistic::LogOfWeighted => (w * y).ln(),
                LogStatistic::WeightedLog => w * y.ln(),
            };
        }
        stats.weighted_n += w;
    }
    stats
}

fn weighted_means(view: &SampleView<'_>, from: usize, to: usize) -> (Vec<f64>, f64) {
    let stats = reference_stats(view, from, to, LogStatistic::Disabled);
    let means = stats.sum.iter().map(|s| s / stats.weighted_n).collect();
    (means, stats.weighted_n)
}

/// Weighted variance around the mean, averaged over outputs; zero when empty.
pub fn reference_variance(view: &SampleView<'_>, from: usize, to: usize) -> f64 {
    let (means, weighted_n) = weighted_means(view, from, to);
    if weighted_n <= 0.0 {
        return 0.0;
    }
    let mut total = 0.0;
    for p in from..to {
        let i = view.sample_at(p);
        let w = view.weight(i);
        for (k, &y) in view.row(i).iter().enumerate() {
            total += w * (y - means[k]).powi(2);
        }
    }
    total / weighted_n / view.n_outputs() as f64
}

/// Mean half Gamma deviance `(y − μ)/μ − ln(y/μ)` around the weighted mean,
/// averaged over outputs; zero when empty.
pub fn reference_gamma_deviance(view: &SampleView<'_>, from: usize, to: usize) -> f64 {
    let (means, weighted_n) = weighted_means(view, from, to);
    if weighted_n <= 0.0 {
        return 0.0;
    }
    let mut total = 0.0;
    for p in from..to {
        let i = view.sample_at(p);
        let w = view.weight(i);
        if w == 0.0 {
            continue;
        }
        for (k, &y) in view.row(i).iter().enumerate() {
            let mu = means[k];
            total += w * ((y - mu) / mu - (y / mu).ln());
        }
    }
    total / weighted_n / view.n_outputs() as f64
}
