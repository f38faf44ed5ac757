mod baseline_engine;
mod engine_error;
mod estimation_engine;
mod fit_statistics;
mod fitted_model;

pub use baseline_engine::BaselineEngine;
pub use engine_error::EstimationError;
pub use estimation_engine::EstimationEngine;
pub use fit_statistics::FitStatistics;
pub use fitted_model::FittedModel;
