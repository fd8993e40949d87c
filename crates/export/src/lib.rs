//! Caseforge Export
//!
//! Serializes parsed test case records to CSV and XLSX files

mod csv_writer;
mod xlsx_writer;

pub use csv_writer::write_csv;
pub use xlsx_writer::write_xlsx;

/// Output column labels, in table order
pub const HEADER: [&str; 4] = ["Type", "Case Name", "Steps", "Expected Result"];
