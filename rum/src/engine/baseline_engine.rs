use super::{EstimationEngine, EstimationError, FitStatistics, FittedModel};
use crate::eval::logit_ops;
use log::debug;
use rum_core::dataset::Dataset;
use rum_core::model::ChoiceModelSpec;
use std::collections::HashMap;

/// evaluates a specification at its declared starting values without
/// optimizing. the resulting log likelihood is the reference point an
/// estimation engine reports before its search begins.
pub struct BaselineEngine {}

impl EstimationEngine for BaselineEngine {
    fn estimate(
        &self,
        spec: &ChoiceModelSpec,
        dataset: &Dataset,
    ) -> Result<FittedModel, EstimationError> {
        spec.validate()?;
        spec.validate_columns(dataset)?;
        let estimates: HashMap<String, f64> = spec
            .parameters
            .iter()
            .map(|p| (p.name.clone(), p.initial))
            .collect();
        let log_likelihood = logit_ops::log_likelihood(spec, dataset, &estimates)?;
        debug!(
            "evaluated {} at starting values: log likelihood {}",
            spec.name, log_likelihood
        );
        Ok(FittedModel {
            model_name: spec.name.clone(),
            estimates,
            statistics: FitStatistics {
                log_likelihood,
                observations: dataset.len(),
                estimated_parameters: spec.estimated_parameter_count(),
            },
        })
    }
}
