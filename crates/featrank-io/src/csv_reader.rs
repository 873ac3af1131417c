//! CSV file reader with type inference

use crate::reader::{DataReader, IoError, IoResult};
use crate::schema::{ColumnDescriptor, ColumnType, DataColumn, DataSchema};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV file reader
///
/// The file is read once on open; records are kept as raw strings and
/// parsed per column on demand.
pub struct CsvReader {
    path: String,
    schema: DataSchema,
    cells: Vec<Vec<String>>,
}

impl CsvReader {
    /// Open a comma-delimited file with a header row
    pub fn open(path: impl AsRef<Path>) -> IoResult<Self> {
        Self::open_with_options(path, b',')
    }

    /// Open a delimited file with a header row
    pub fn open_with_options(path: impl AsRef<Path>, delimiter: u8) -> IoResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
        let mut reader = Self::from_reader(BufReader::new(file), delimiter)?;
        reader.path = path.display().to_string();
        Ok(reader)
    }

    /// Read delimited data from any source
    pub fn from_reader<R: Read>(source: R, delimiter: u8) -> IoResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| IoError::InvalidFormat(e.to_string()))?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();

        let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        let mut num_records = 0;

        // Ragged rows are rejected by the csv crate itself
        for result in reader.records() {
            let record = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
            for (i, value) in record.iter().enumerate() {
                cells[i].push(value.to_string());
            }
            num_records += 1;
        }

        let columns: Vec<ColumnDescriptor> = headers
            .into_iter()
            .zip(&cells)
            .map(|(name, values)| ColumnDescriptor::new(name, infer_type(values)))
            .collect();

        Ok(Self {
            path: String::new(),
            schema: DataSchema::new(columns, num_records),
            cells,
        })
    }
}

impl DataReader for CsvReader {
    fn read_schema(&self) -> IoResult<DataSchema> {
        Ok(self.schema.clone())
    }

    fn read_column(&self, name: &str) -> IoResult<DataColumn> {
        let col_index = self
            .schema
            .column_index(name)
            .ok_or_else(|| IoError::ColumnNotFound(name.to_string()))?;

        let col_desc = &self.schema.columns[col_index];
        parse_column(&col_desc.name, &self.cells[col_index], col_desc.dtype)
    }

    fn path(&self) -> Option<&str> {
        if self.path.is_empty() {
            None
        } else {
            Some(&self.path)
        }
    }

    fn format_name(&self) -> &'static str {
        "CSV"
    }
}

/// Infer column type from all values
fn infer_type(values: &[String]) -> ColumnType {
    let non_empty: Vec<&str> = values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if non_empty.is_empty() {
        return ColumnType::String;
    }

    // Integers only when no cell is blank; a blank float parses to NaN
    if non_empty.len() == values.len() && non_empty.iter().all(|s| s.parse::<i64>().is_ok()) {
        return ColumnType::Int64;
    }

    if non_empty.iter().all(|s| s.parse::<f64>().is_ok()) {
        return ColumnType::Float64;
    }

    ColumnType::String
}

/// Parse column values into a DataColumn
fn parse_column(name: &str, values: &[String], dtype: ColumnType) -> IoResult<DataColumn> {
    let invalid = |value: &str| {
        IoError::InvalidFormat(format!(
            "column {:?}: cannot parse {:?} as {}",
            name,
            value,
            dtype.name()
        ))
    };

    let column = match dtype {
        ColumnType::Float64 => DataColumn::Float64(
            values
                .iter()
                .map(|s| {
                    let s = s.trim();
                    if s.is_empty() {
                        Ok(f64::NAN)
                    } else {
                        s.parse().map_err(|_| invalid(s))
                    }
                })
                .collect::<IoResult<_>>()?,
        ),
        ColumnType::Int64 => DataColumn::Int64(
            values
                .iter()
                .map(|s| {
                    let s = s.trim();
                    s.parse().map_err(|_| invalid(s))
                })
                .collect::<IoResult<_>>()?,
        ),
        ColumnType::String => DataColumn::String(values.to_vec()),
    };
    Ok(column)
}
