mod gamma_deviance_criterion;
mod log_linked_criterion;
mod squared_error_criterion;

pub use gamma_deviance_criterion::GammaDevianceCriterion;
pub use log_linked_criterion::LogLinkedCriterion;
pub use squared_error_criterion::SquaredErrorCriterion;

/// `(sq_sum / w − Σ_k (sums[k] / w)²) / n_outputs`; zero for an empty set.
#[inline]
pub(crate) fn variance_impurity(sq_sum: f64, sums: &[f64], weighted_n: f64) -> f64 {
    if weighted_n <= 0.0 {
        return 0.0;
    }
    let mut impurity = sq_sum / weighted_n;
    for &s in sums {
        let mean = s / weighted_n;
        impurity -= mean * mean;
    }
    impurity / sums.len() as f64
}

/// `Σ_k sums[k]² / w`; zero for an empty set.
#[inline]
pub(crate) fn proxy_term(sums: &[f64], weighted_n: f64) -> f64 {
    if weighted_n <= 0.0 {
        return 0.0;
    }
    sums.iter().map(|s| s * s).sum::<f64>() / weighted_n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variance_of_ramp() {
        assert!((variance_impurity(30.0, &[10.0], 4.0) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn empty_sets_are_zero() {
        assert_eq!(variance_impurity(0.0, &[0.0, 0.0], 0.0), 0.0);
        assert_eq!(proxy_term(&[1.0], 0.0), 0.0);
    }

    #[test]
    fn multi_output_variance_is_averaged() {
        // outputs {1, 3} and {10, 10}: variances 1 and 0
        let impurity = variance_impurity(1.0 + 9.0 + 100.0 + 100.0, &[4.0, 20.0], 2.0);
        assert!((impurity - 0.5).abs() < 1e-12);
    }
}
