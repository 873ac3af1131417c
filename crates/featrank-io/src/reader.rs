//! Data reader trait and common types
//!
//! The `DataReader` trait provides a uniform interface for reading
//! tabular data from the supported file formats.

use crate::schema::{DataColumn, DataSchema};
use crate::table::DataTable;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during I/O operations
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Type mismatch in column {column}: expected {expected}, got {actual}")]
    TypeMismatch {
        column: String,
        expected: String,
        actual: String,
    },

    #[error("Length mismatch for column {column}: expected {expected} rows, got {actual}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Out of bounds: row {index}, table has {size} rows")]
    OutOfBounds { index: usize, size: usize },
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;

/// Trait for reading tabular data from various formats
pub trait DataReader {
    /// Read the schema (column names, types, record count)
    fn read_schema(&self) -> IoResult<DataSchema>;

    /// Read a single column by name
    fn read_column(&self, name: &str) -> IoResult<DataColumn>;

    /// Read every column into an in-memory table, preserving file order
    fn read_table(&self) -> IoResult<DataTable> {
        let schema = self.read_schema()?;
        let mut table = DataTable::new();
        for desc in &schema.columns {
            table.add_column(desc.name.clone(), self.read_column(&desc.name)?)?;
        }
        Ok(table)
    }

    /// Get the file path (if applicable)
    fn path(&self) -> Option<&str> {
        None
    }

    /// Get the format name
    fn format_name(&self) -> &'static str;
}

/// A boxed reader for dynamic dispatch
pub type BoxedReader = Box<dyn DataReader>;

/// Open a file and return an appropriate reader
///
/// The format is auto-detected from the file extension.
pub fn open_file(path: impl AsRef<Path>) -> IoResult<BoxedReader> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        #[cfg(feature = "csv")]
        "csv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open(path)?))
        }

        #[cfg(feature = "csv")]
        "tsv" => {
            use crate::csv_reader::CsvReader;
            Ok(Box::new(CsvReader::open_with_options(path, b'\t')?))
        }

        _ => Err(IoError::InvalidFormat(format!(
            "Unknown file extension: {:?} ({})",
            extension,
            path.display()
        ))),
    }
}

/// Open a file and read it fully into memory
pub fn load_table(path: impl AsRef<Path>) -> IoResult<DataTable> {
    let path = path.as_ref();
    let reader = open_file(path)?;
    let table = reader.read_table()?;
    tracing::info!(
        "Loaded {} table {} ({} rows, {} columns)",
        reader.format_name(),
        path.display(),
        table.num_rows(),
        table.num_columns()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_rejected() {
        let result = open_file("ratings.xlsx");
        assert!(matches!(result, Err(IoError::InvalidFormat(_))));
    }
}
