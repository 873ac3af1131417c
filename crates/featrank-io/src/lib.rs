//! featrank-io - Tabular data I/O for featrank
//!
//! This crate loads small delimited datasets into memory:
//!
//! - **CSV**: comma-separated values with type inference
//! - **TSV**: tab-separated values, same inference rules
//!
//! # Design
//!
//! All readers implement the `DataReader` trait for uniform access.
//! A reader produces a `DataTable`: ordered, named, typed columns of
//! equal length. Columns are always looked up by name, never by position.

pub mod reader;
pub mod schema;
pub mod table;

#[cfg(feature = "csv")]
pub mod csv_reader;

pub use reader::*;
pub use schema::*;
pub use table::*;
