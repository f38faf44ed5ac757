use super::DatasetError;
use itertools::Itertools;
use std::collections::HashMap;

/// an in-memory tabular dataset: equal-length named columns of f64
/// values. model specifications reference columns by name, replacing
/// engine-side database binding with explicit lookup.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    name: String,
    columns: HashMap<String, Vec<f64>>,
    len: usize,
}

impl Dataset {
    /// builds a dataset from named columns, confirming that all columns
    /// share the same length
    pub fn new(name: &str, columns: HashMap<String, Vec<f64>>) -> Result<Dataset, DatasetError> {
        let len = columns.values().next().map(|c| c.len()).unwrap_or_default();
        for (column, values) in columns.iter() {
            if values.len() != len {
                return Err(DatasetError::ColumnLengthMismatch {
                    column: column.clone(),
                    expected: len,
                    found: values.len(),
                });
            }
        }
        Ok(Dataset {
            name: name.to_string(),
            columns,
            len,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// the number of observations (rows)
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// column names in lexical order
    pub fn column_names(&self) -> Vec<&String> {
        self.columns.keys().sorted().collect_vec()
    }

    pub fn column(&self, name: &str) -> Result<&[f64], DatasetError> {
        self.columns
            .get(name)
            .map(|c| c.as_slice())
            .ok_or_else(|| DatasetError::UnknownColumn(name.to_string()))
    }

    /// a column of class indices (choices, labels) as usize values.
    /// fails on negative, fractional or non-finite entries.
    pub fn integer_column(&self, name: &str) -> Result<Vec<usize>, DatasetError> {
        let column = self.column(name)?;
        column
            .iter()
            .enumerate()
            .map(|(row, value)| {
                if value.fract() != 0.0 || *value < 0.0 {
                    Err(DatasetError::NonIntegerValue {
                        column: name.to_string(),
                        row,
                        value: *value,
                    })
                } else {
                    Ok(*value as usize)
                }
            })
            .collect()
    }
}
