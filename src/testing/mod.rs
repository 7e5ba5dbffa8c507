pub mod dummies;
pub mod reference;

pub use dummies::OwnedSamples;
pub use reference::{ReferenceStats, reference_gamma_deviance, reference_stats, reference_variance};
