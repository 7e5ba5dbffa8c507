//! Incremental split-quality criteria for regression decision trees.
//!
//! A tree builder binds a [`Criterion`] to the samples of one node, slides a
//! cut position through them and reads impurity figures at each cut. The
//! criterion never reorders samples; it reads them through the
//! [`SampleView`] the builder hands in.
//!
//! [`Criterion`]: crate::criteria::Criterion
//! [`SampleView`]: crate::core::samples::SampleView

pub mod config;
pub mod core;
pub mod criteria;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
