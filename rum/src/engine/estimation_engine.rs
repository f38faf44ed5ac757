use super::{EstimationError, FittedModel};
use rum_core::dataset::Dataset;
use rum_core::model::ChoiceModelSpec;

/// boundary to a discrete-choice estimation engine: consumes a model
/// specification and a dataset and returns estimated parameter values
/// with fit statistics. implementations own the numerical search; this
/// crate only assembles specifications and evaluates them.
pub trait EstimationEngine {
    fn estimate(
        &self,
        spec: &ChoiceModelSpec,
        dataset: &Dataset,
    ) -> Result<FittedModel, EstimationError>;
}
