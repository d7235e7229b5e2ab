//! Genealogy table ingestion.
//!
//! Reads a headerless two-dimensional table where column 0 holds a parent and
//! the remaining columns hold that parent's relatives. Cells come back as raw
//! text; all normalization happens downstream.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lineage_ingest::{ReadOptions, read_table};
//!
//! let table = read_table(Path::new("geneology.xlsx"), &ReadOptions::default())?;
//! println!("{} rows", table.len());
//! ```

mod csv_table;
mod error;
mod format;
mod table;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Table Model ===
pub use table::{RawRow, RawTable};

// === Readers ===
pub use csv_table::read_csv_table;
pub use format::{ReadOptions, TableFormat, read_table};
pub use workbook::{cell_to_text, read_workbook_table};
