mod samples;

pub use samples::OwnedSamples;
