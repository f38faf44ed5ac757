use crate::dataset::DatasetError;

#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("specification declares no alternatives")]
    NoAlternatives,
    #[error("duplicate declaration of parameter {0}")]
    DuplicateParameter(String),
    #[error("utility for alternative {alternative} references undeclared parameter {coefficient}")]
    UndeclaredCoefficient {
        alternative: usize,
        coefficient: String,
    },
    #[error("alternative {0} has no availability condition")]
    MissingAvailability(usize),
    #[error("availability condition references unknown alternative {0}")]
    UnknownAlternative(usize),
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
    #[error("failed to build choice model specification: {0}")]
    BuildError(String),
}
