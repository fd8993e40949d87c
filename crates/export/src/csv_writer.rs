use caseforge_common::{CaseforgeError, Result};
use caseforge_table::TestCaseRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::HEADER;

/// UTF-8 byte-order mark, kept for spreadsheet tools that sniff encoding
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write records to a CSV file
///
/// UTF-8 with BOM, one header line, one row per record in input order,
/// no synthetic index column.
pub fn write_csv(path: &Path, records: &[TestCaseRecord]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(HEADER)
        .map_err(|e| CaseforgeError::export(format!("Failed to write CSV header: {}", e)))?;

    for record in records {
        writer
            .write_record([
                &record.case_type,
                &record.name,
                &record.steps,
                &record.expected_result,
            ])
            .map_err(|e| CaseforgeError::export(format!("Failed to write CSV row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| CaseforgeError::export(format!("Failed to flush CSV: {}", e)))?;

    info!("Saved {} test cases to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("caseforge-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_write_csv_bom_header_rows() {
        let path = temp_path("cases.csv");
        let records = vec![
            TestCaseRecord::new("Happy Path", "Login OK", "Step1\nStep2", "User logged in"),
            TestCaseRecord::new("Test to Fail", "Bad login", "Enter bad password", "Error shown"),
        ];

        write_csv(&path, &records).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(UTF8_BOM));

        let content = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Type,Case Name,Steps,Expected Result"));
        // Multi-line steps field is quoted, spanning two physical lines
        assert_eq!(lines.next(), Some("Happy Path,Login OK,\"Step1"));
        assert_eq!(lines.next(), Some("Step2\",User logged in"));
        assert_eq!(
            lines.next(),
            Some("Test to Fail,Bad login,Enter bad password,Error shown")
        );
        assert_eq!(lines.next(), None);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_write_csv_empty_records() {
        let path = temp_path("empty.csv");
        write_csv(&path, &[]).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let content = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
        assert_eq!(content.lines().count(), 1);

        std::fs::remove_file(&path).ok();
    }
}
