use rum_core::dataset::{Dataset, DatasetError};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum CsvOpsError {
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    #[error("row {row} column {column}: cannot parse '{value}' as a number: {source}")]
    ParseError {
        row: usize,
        column: String,
        value: String,
        source: std::num::ParseFloatError,
    },
    #[error(transparent)]
    DatasetError(#[from] DatasetError),
}

/// reads a CSV file with a header row into a dataset. headers become
/// column names and every field must parse as a number.
pub fn read_dataset<P: AsRef<Path>>(path: P, name: &str) -> Result<Dataset, CsvOpsError> {
    let reader = csv::Reader::from_path(path)?;
    read_dataset_records(reader, name)
}

fn read_dataset_records<R: Read>(
    mut reader: csv::Reader<R>,
    name: &str,
) -> Result<Dataset, CsvOpsError> {
    let headers = reader.headers()?.clone();
    let mut columns: HashMap<String, Vec<f64>> = headers
        .iter()
        .map(|header| (header.to_string(), vec![]))
        .collect();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        for (header, value) in headers.iter().zip(record.iter()) {
            let parsed = value
                .trim()
                .parse::<f64>()
                .map_err(|e| CsvOpsError::ParseError {
                    row,
                    column: header.to_string(),
                    value: value.to_string(),
                    source: e,
                })?;
            if let Some(column) = columns.get_mut(header) {
                column.push(parsed);
            }
        }
    }
    Ok(Dataset::new(name, columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_dataset_records() {
        let input = "TRAIN_TT,SM_TT,CHOICE\n10.5,8.0,0\n12.0,9.5,1\n";
        let reader = csv::Reader::from_reader(input.as_bytes());
        let dataset = read_dataset_records(reader, "swissmetro_train").unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.column("TRAIN_TT").unwrap(), &[10.5, 12.0]);
        assert_eq!(dataset.integer_column("CHOICE").unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_non_numeric_field_is_an_error() {
        let input = "a,b\n1.0,yes\n";
        let reader = csv::Reader::from_reader(input.as_bytes());
        let error = read_dataset_records(reader, "test").unwrap_err();
        assert!(matches!(
            error,
            CsvOpsError::ParseError { row: 0, column, .. } if column == "b"
        ));
    }
}
