use caseforge_common::{CaseforgeError, Result};
use caseforge_table::TestCaseRecord;
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

use crate::HEADER;

/// Write records to an XLSX workbook mirroring the CSV layout
pub fn write_xlsx(path: &Path, records: &[TestCaseRecord]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, label) in HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *label)
            .map_err(|e| CaseforgeError::export(format!("Failed to write XLSX header: {}", e)))?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let cells = [
            &record.case_type,
            &record.name,
            &record.steps,
            &record.expected_result,
        ];
        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(row, col as u16, value.as_str())
                .map_err(|e| {
                    CaseforgeError::export(format!("Failed to write XLSX row {}: {}", row, e))
                })?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| CaseforgeError::export(format!("Failed to save XLSX: {}", e)))?;

    info!("Saved {} test cases to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_xlsx_creates_file() {
        let path = std::env::temp_dir()
            .join(format!("caseforge-{}-cases.xlsx", std::process::id()));
        let records = vec![TestCaseRecord::new(
            "Happy Path",
            "Login OK",
            "Step1",
            "User logged in",
        )];

        write_xlsx(&path, &records).unwrap();
        assert!(path.exists());

        std::fs::remove_file(&path).ok();
    }
}
