mod log_statistic;
mod weighted_stat_accumulator;

pub use log_statistic::LogStatistic;
pub use weighted_stat_accumulator::WeightedStatAccumulator;
