//! In-memory table of named, typed columns

use crate::reader::{IoError, IoResult};
use crate::schema::{ColumnDescriptor, DataColumn, DataSchema};

/// An ordered set of equally long, named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    columns: Vec<(String, DataColumn)>,
    num_rows: usize,
}

impl DataTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn add_column(&mut self, name: impl Into<String>, data: DataColumn) -> IoResult<()> {
        let name = name.into();
        if self.columns.iter().any(|(n, _)| *n == name) {
            return Err(IoError::DuplicateColumn(name));
        }
        if self.columns.is_empty() {
            self.num_rows = data.len();
        } else if data.len() != self.num_rows {
            return Err(IoError::LengthMismatch {
                column: name,
                expected: self.num_rows,
                actual: data.len(),
            });
        }
        self.columns.push((name, data));
        Ok(())
    }

    /// Builder-style `add_column`
    pub fn with_column(mut self, name: impl Into<String>, data: DataColumn) -> IoResult<Self> {
        self.add_column(name, data)?;
        Ok(self)
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&DataColumn> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data)
    }

    /// Get a column by name, or `ColumnNotFound`
    pub fn require_column(&self, name: &str) -> IoResult<&DataColumn> {
        self.column(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))
    }

    /// Numeric column as f64 values (integers are widened)
    pub fn f64_column(&self, name: &str) -> IoResult<Vec<f64>> {
        let column = self.require_column(name)?;
        column.to_f64().ok_or_else(|| IoError::TypeMismatch {
            column: name.to_string(),
            expected: "numeric".to_string(),
            actual: column.dtype().name().to_string(),
        })
    }

    /// Integer column
    ///
    /// A float column is accepted when every cell holds a whole number; a
    /// blank (NaN) or fractional cell is `InvalidFormat` naming the row.
    pub fn i64_column(&self, name: &str) -> IoResult<Vec<i64>> {
        match self.require_column(name)? {
            DataColumn::Int64(values) => Ok(values.clone()),
            DataColumn::Float64(values) => values
                .iter()
                .enumerate()
                .map(|(row, &value)| {
                    if value.is_nan() {
                        Err(IoError::InvalidFormat(format!(
                            "column {:?} row {}: empty cell in integer column",
                            name, row
                        )))
                    } else if value.fract() != 0.0 || value.abs() > i64::MAX as f64 {
                        Err(IoError::InvalidFormat(format!(
                            "column {:?} row {}: {} is not an integer",
                            name, row, value
                        )))
                    } else {
                        Ok(value as i64)
                    }
                })
                .collect(),
            other => Err(IoError::TypeMismatch {
                column: name.to_string(),
                expected: "int64".to_string(),
                actual: other.dtype().name().to_string(),
            }),
        }
    }

    /// Any column rendered as strings
    pub fn string_column(&self, name: &str) -> IoResult<Vec<String>> {
        match self.require_column(name)? {
            DataColumn::String(values) => Ok(values.clone()),
            other => Ok((0..other.len())
                .filter_map(|row| other.display_value(row))
                .collect()),
        }
    }

    /// Column names in insertion order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.num_rows == 0
    }

    /// Describe the table
    pub fn schema(&self) -> DataSchema {
        let columns = self
            .columns
            .iter()
            .map(|(name, data)| ColumnDescriptor::new(name.clone(), data.dtype()))
            .collect();
        DataSchema::new(columns, self.num_rows)
    }
}
