use crate::criteria::CriterionError;

/// Row-major `n_samples × n_outputs` view over regression targets.
#[derive(Debug, Clone, Copy)]
pub struct TargetMatrix<'a> {
    values: &'a [f64],
    n_outputs: usize,
}

impl<'a> TargetMatrix<'a> {
    pub fn new(values: &'a [f64], n_outputs: usize) -> Result<Self, CriterionError> {
        if n_outputs == 0 {
            return Err(CriterionError::InvalidDataset(
                "targets must have at least one output".into(),
            ));
        }
        if values.len() % n_outputs != 0 {
            return Err(CriterionError::InvalidDataset(format!(
                "{} target values do not form rows of {n_outputs} outputs",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().position(|v| !v.is_finite()) {
            return Err(CriterionError::InvalidDataset(format!(
                "target value at offset {bad} is not finite"
            )));
        }
        Ok(Self { values, n_outputs })
    }

    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.values.len() / self.n_outputs
    }

    /// Targets of raw sample `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &'a [f64] {
        let offset = i * self.n_outputs;
        &self.values[offset..offset + self.n_outputs]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_contiguous_outputs() {
        let values = [1.0, 10.0, 2.0, 20.0, 3.0, 30.0];
        let m = TargetMatrix::new(&values, 2).unwrap();
        assert_eq!(m.n_samples(), 3);
        assert_eq!(m.row(1), &[2.0, 20.0]);
    }

    #[test]
    fn rejects_ragged_buffer() {
        let values = [1.0, 2.0, 3.0];
        assert!(TargetMatrix::new(&values, 2).is_err());
    }

    #[test]
    fn rejects_zero_outputs_and_non_finite_values() {
        assert!(TargetMatrix::new(&[1.0], 0).is_err());
        assert!(TargetMatrix::new(&[1.0, f64::NAN], 1).is_err());
    }
}
