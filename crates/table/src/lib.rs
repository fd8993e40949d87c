//! Caseforge Table Parsing
//!
//! Extracts structured test case records from markdown table output

mod parser;
mod types;

pub use parser::parse_table;
pub use types::TestCaseRecord;
