use crate::config::CriterionChoice;
use crate::criteria::regression::{
    GammaDevianceCriterion, LogLinkedCriterion, SquaredErrorCriterion,
};
use crate::criteria::{Criterion, CriterionError};

/// Instantiates the criterion a choice describes.
///
/// Each tree-growing worker should own the instance it gets here.
pub fn build_criterion(
    choice: &CriterionChoice,
    n_outputs: usize,
    n_samples: usize,
) -> Result<Box<dyn Criterion + Send>, CriterionError> {
    log::debug!(
        "building {} criterion for {n_outputs} outputs over {n_samples} samples",
        choice.kind()
    );
    Ok(match choice {
        CriterionChoice::SquaredError(params) => Box::new(
            SquaredErrorCriterion::new(n_outputs, n_samples)?
                .with_clamping(params.clamp_negative_impurity),
        ),
        CriterionChoice::LogLinked(_) => Box::new(LogLinkedCriterion::new(n_outputs, n_samples)?),
        CriterionChoice::GammaDeviance(_) => {
            Box::new(GammaDevianceCriterion::new(n_outputs, n_samples)?)
        }
    })
}
