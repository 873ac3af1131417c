//! Schema and column types for tabular data

use serde::{Deserialize, Serialize};

/// Schema describing the structure of a table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataSchema {
    /// Column descriptors, in file order
    pub columns: Vec<ColumnDescriptor>,

    /// Number of records
    pub num_records: usize,
}

impl DataSchema {
    /// Create a new schema
    pub fn new(columns: Vec<ColumnDescriptor>, num_records: usize) -> Self {
        Self {
            columns,
            num_records,
        }
    }

    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Get column names
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of columns
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }
}

/// Descriptor for a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name (the header label)
    pub name: String,

    /// Data type
    pub dtype: ColumnType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, dtype: ColumnType) -> Self {
        Self {
            name: name.into(),
            dtype,
        }
    }
}

/// Column data type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    Float64,
    Int64,
    String,
}

impl ColumnType {
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::Float64 => "float64",
            ColumnType::Int64 => "int64",
            ColumnType::String => "string",
        }
    }
}

/// A column of data
#[derive(Debug, Clone, PartialEq)]
pub enum DataColumn {
    Float64(Vec<f64>),
    Int64(Vec<i64>),
    String(Vec<String>),
}

impl DataColumn {
    /// Get the column type
    pub fn dtype(&self) -> ColumnType {
        match self {
            DataColumn::Float64(_) => ColumnType::Float64,
            DataColumn::Int64(_) => ColumnType::Int64,
            DataColumn::String(_) => ColumnType::String,
        }
    }

    /// Get the number of elements
    pub fn len(&self) -> usize {
        match self {
            DataColumn::Float64(v) => v.len(),
            DataColumn::Int64(v) => v.len(),
            DataColumn::String(v) => v.len(),
        }
    }

    /// Check if the column is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert to f64 (for numeric types)
    pub fn to_f64(&self) -> Option<Vec<f64>> {
        match self {
            DataColumn::Float64(v) => Some(v.clone()),
            DataColumn::Int64(v) => Some(v.iter().map(|&x| x as f64).collect()),
            _ => None,
        }
    }

    /// Render a single cell for display
    pub fn display_value(&self, row: usize) -> Option<String> {
        match self {
            DataColumn::Float64(v) => v.get(row).map(|x| x.to_string()),
            DataColumn::Int64(v) => v.get(row).map(|x| x.to_string()),
            DataColumn::String(v) => v.get(row).cloned(),
        }
    }
}
