use rum_core::dataset::DatasetError;

#[derive(thiserror::Error, Debug)]
pub enum LogitError {
    #[error("no estimate supplied for parameter {0}")]
    MissingEstimate(String),
    #[error("observation {observation} chose alternative {alternative}, which the specification does not declare")]
    UnknownChosenAlternative {
        observation: usize,
        alternative: usize,
    },
    #[error("observation {0} has no available alternative")]
    NoAvailableAlternative(usize),
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
}
