use crate::core::samples::SampleView;
use crate::criteria::{CriterionError, PartitionedCriterion};

/// Impurities of the two children at the current cut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildrenImpurity {
    pub left: f64,
    pub right: f64,
    /// Impurities computed from the log statistics, for criteria that track them.
    pub log: Option<LogChildrenImpurity>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogChildrenImpurity {
    pub left: f64,
    pub right: f64,
}

impl ChildrenImpurity {
    pub fn new(left: f64, right: f64) -> Self {
        Self {
            left,
            right,
            log: None,
        }
    }

    pub fn with_log(mut self, left: f64, right: f64) -> Self {
        self.log = Some(LogChildrenImpurity { left, right });
        self
    }

    /// `(left, right)` pair the criterion ranks splits by; feed this to
    /// [`Criterion::impurity_improvement`].
    pub fn ranking_pair(&self) -> (f64, f64) {
        match self.log {
            Some(log) => (log.left, log.right),
            None => (self.left, self.right),
        }
    }
}

/// Split-quality evaluation over a node window.
///
/// A criterion is bound to a window with [`init`](Criterion::init), then the
/// cut is slid with [`update`](Criterion::update) while the builder reads
/// [`proxy_impurity_improvement`](Criterion::proxy_impurity_improvement) to
/// rank candidates. The exact impurities are only needed for the winner.
///
/// The window bookkeeping lives in a shared [`PartitionedCriterion`]; a
/// variant only supplies the impurity formulas on top of it.
pub trait Criterion {
    fn partition(&self) -> &PartitionedCriterion;
    fn partition_mut(&mut self) -> &mut PartitionedCriterion;

    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    fn init(
        &mut self,
        samples: &SampleView<'_>,
        weighted_n_samples: f64,
        start: usize,
        end: usize,
    ) -> Result<(), CriterionError> {
        self.partition_mut()
            .init(samples, weighted_n_samples, start, end)
    }

    fn reset(&mut self) {
        self.partition_mut().reset();
    }

    fn reverse_reset(&mut self) {
        self.partition_mut().reverse_reset();
    }

    fn update(&mut self, samples: &SampleView<'_>, new_pos: usize) {
        self.partition_mut().update(samples, new_pos);
    }

    /// Impurity of the whole bound node; smaller is better.
    fn node_impurity(&self) -> f64;

    fn children_impurity(&self) -> ChildrenImpurity;

    /// Writes one prediction per output into `dest`.
    fn node_value(&self, dest: &mut [f64]);

    /// Order-preserving stand-in for [`impurity_improvement`](Criterion::impurity_improvement)
    /// among cuts of the same node.
    fn proxy_impurity_improvement(&self) -> f64;

    fn impurity_improvement(
        &self,
        impurity_parent: f64,
        impurity_left: f64,
        impurity_right: f64,
    ) -> f64 {
        self.partition()
            .impurity_improvement(impurity_parent, impurity_left, impurity_right)
    }
}
