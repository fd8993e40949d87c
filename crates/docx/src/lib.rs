//! Caseforge Document Reader
//!
//! Extracts plain paragraph text from functional requirement documents

mod reader;

pub use reader::{extract_paragraphs, read_document};
