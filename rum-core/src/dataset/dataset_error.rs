#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("dataset has no column {0}")]
    UnknownColumn(String),
    #[error("column {column} has {found} rows, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("expected column {column} to hold non-negative integers, found {value} at row {row}")]
    NonIntegerValue {
        column: String,
        row: usize,
        value: f64,
    },
}
