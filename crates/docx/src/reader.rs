use caseforge_common::{CaseforgeError, Result};
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use std::path::Path;
use tracing::{debug, info};

/// Read source text from a document file
///
/// `.docx` files are parsed paragraph by paragraph; any other extension is
/// read as plain UTF-8 text. In both cases whitespace-only paragraphs are
/// dropped and the survivors joined with single newlines.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CaseforgeError::input(format!(
            "Document not found: {}",
            path.display()
        )));
    }

    let is_docx = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("docx"))
        .unwrap_or(false);

    let text = if is_docx {
        read_docx_text(path)?
    } else {
        debug!("Non-docx extension, reading as plain text: {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        extract_paragraphs(raw.lines())
    };

    info!(
        "Document read: {} ({} chars)",
        path.display(),
        text.len()
    );

    Ok(text)
}

/// Extract paragraph text from a .docx file
fn read_docx_text(path: &Path) -> Result<String> {
    let buf = std::fs::read(path)?;
    let docx = read_docx(&buf).map_err(|e| {
        CaseforgeError::input(format!(
            "Failed to parse docx {}: {}",
            path.display(),
            e
        ))
    })?;

    let paragraphs = docx.document.children.iter().filter_map(|child| {
        if let DocumentChild::Paragraph(p) = child {
            Some(paragraph_text(p))
        } else {
            None
        }
    });

    Ok(extract_paragraphs(paragraphs))
}

/// Join paragraphs with single newlines, dropping whitespace-only ones
pub fn extract_paragraphs<I, S>(paragraphs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paragraphs
        .into_iter()
        .filter_map(|p| {
            let p = p.as_ref();
            if p.trim().is_empty() {
                None
            } else {
                Some(p.to_string())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenate the text runs of a single paragraph
fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(text) = run_child {
                    out.push_str(&text.text);
                }
            }
        }
    }
    out
}
