#[derive(thiserror::Error, Debug)]
pub enum MetricsError {
    #[error("predictions have {predictions} rows but labels have {labels} entries")]
    LengthMismatch { predictions: usize, labels: usize },
    #[error("metrics are undefined over zero observations")]
    EmptyInput,
    #[error("label {label} at row {row} is out of range for {classes} predicted classes")]
    LabelOutOfRange {
        row: usize,
        label: usize,
        classes: usize,
    },
}
