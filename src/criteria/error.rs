use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CriterionError {
    #[error("failed to allocate criterion buffers for {requested} values")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Allocates a zero-filled buffer, reporting allocation failure instead of aborting.
pub(crate) fn zeroed_buffer(len: usize) -> Result<Vec<f64>, CriterionError> {
    let mut buf = Vec::new();
    resize_buffer(&mut buf, len)?;
    Ok(buf)
}

/// Resizes `buf` to exactly `len` zeroes, reusing its capacity when possible.
pub(crate) fn resize_buffer(buf: &mut Vec<f64>, len: usize) -> Result<(), CriterionError> {
    buf.clear();
    buf.try_reserve_exact(len)
        .map_err(|source| CriterionError::Allocation {
            requested: len,
            source,
        })?;
    buf.resize(len, 0.0);
    Ok(())
}
