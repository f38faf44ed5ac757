use crate::eval::LogitError;
use rum_core::dataset::DatasetError;
use rum_core::model::SpecError;

#[derive(thiserror::Error, Debug)]
pub enum EstimationError {
    #[error(transparent)]
    SpecError(#[from] SpecError),
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
    #[error(transparent)]
    LogitError(#[from] LogitError),
    #[error("estimation failed: {0}")]
    EngineFailure(String),
}
