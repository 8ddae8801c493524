//! CSV ingest and export for the Payroll Processing Engine.
//!
//! This module is the only place that touches the tabular wire format. The
//! reader validates the required column set before any row is decoded, so the
//! calculation modules only ever see fully-typed records; the writer emits the
//! augmented table with a fixed output file name and no index column.

mod reader;
mod writer;

pub use reader::read_records;
pub use writer::{PROCESSED_FILE_NAME, records_to_csv, write_records};
