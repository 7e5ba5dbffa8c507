mod sample_view;
mod target_matrix;

pub use sample_view::SampleView;
pub use target_matrix::TargetMatrix;
