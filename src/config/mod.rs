mod build;
mod criterion_choice;

pub use build::build_criterion;
pub use criterion_choice::*;
