use crate::types::TestCaseRecord;
use tracing::debug;

/// Header tokens in the first cell that mark a header row, not data
const HEADER_TOKENS: &[&str] = &["Tipo", "Type"];

/// Expected number of table columns
const COLUMN_COUNT: usize = 4;

/// Parse markdown table rows out of generation output
///
/// Single forward pass over lines. Any line starting with `|` that is not
/// a separator row is split into cells; only rows with exactly 4 non-empty
/// cells and a non-header first cell become records. `<br>` markers in the
/// steps and expected-result cells are normalized to real newlines.
/// Malformed rows are skipped silently; an empty result is the caller's
/// problem, not a parse error.
///
/// The `in_table` flag mirrors the section structure (reset on `###`
/// headings so per-chunk tables stay distinct) but does not gate row
/// extraction; the column count does.
pub fn parse_table(text: &str) -> Vec<TestCaseRecord> {
    let mut records = Vec::new();
    let mut in_table = false;

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('|') && !is_separator_row(trimmed) {
            if !in_table {
                debug!("Entering table section");
                in_table = true;
            }

            let columns: Vec<&str> = trimmed
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .collect();

            if columns.len() == COLUMN_COUNT && !HEADER_TOKENS.contains(&columns[0]) {
                records.push(TestCaseRecord::new(
                    columns[0],
                    columns[1],
                    normalize_breaks(columns[2]),
                    normalize_breaks(columns[3]),
                ));
            }
        } else if trimmed.contains("###") {
            // New section heading resets table detection
            in_table = false;
        }
    }

    debug!("Parsed {} table rows", records.len());
    records
}

/// Whether a line is a markdown separator row like `|---|---|---|---|`
fn is_separator_row(line: &str) -> bool {
    line.contains('-')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Replace literal `<br>` markers with native line breaks
fn normalize_breaks(cell: &str) -> String {
    cell.replace("<br>", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_header_and_separator() {
        let text = "\
| Type | Nombre del caso | Paso a paso | Resultado esperado |
|---|---|---|---|
| Happy Path | Login OK | Step1<br>Step2 | User logged in |";

        let records = parse_table(text);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            TestCaseRecord::new("Happy Path", "Login OK", "Step1\nStep2", "User logged in")
        );
    }

    #[test]
    fn test_parse_skips_spanish_header() {
        let text = "\
| Tipo | Nombre del caso | Paso a paso | Resultado esperado |
| Test to Fail | Wrong password | Enter bad password | Error shown |";

        let records = parse_table(text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].case_type, "Test to Fail");
    }

    #[test]
    fn test_wrong_column_count_skipped() {
        let text = "\
| Happy Path | Login OK | Step1 |
| Happy Path | Login OK | Step1 | User logged in | extra |";

        assert!(parse_table(text).is_empty());
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        assert!(parse_table("").is_empty());
        assert!(parse_table("No table in this response.").is_empty());
    }

    #[test]
    fn test_rows_across_heading_sections() {
        // The model may emit one table per chunk, each under its own heading
        let text = "\
### Part 1
| Happy Path | Case A | Do A | A done |
### Part 2
| Test to Fail | Case B | Do B wrong | B rejected |";

        let records = parse_table(text);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Case A");
        assert_eq!(records[1].name, "Case B");
    }

    #[test]
    fn test_alignment_separator_skipped() {
        let text = "\
|:---|:---:|---:|---|
| Happy Path | Case | Step | Result |";

        let records = parse_table(text);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let text = "\
| Happy Path | First | s | r |
| Happy Path | Second | s | r |
| Test to Fail | Third | s | r |";

        let records = parse_table(text);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
