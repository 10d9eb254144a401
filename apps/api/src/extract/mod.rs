//! Text extraction from uploaded resume files.
//!
//! The analysis engine only ever sees plain text; this module is the boundary
//! that turns PDF/DOCX/TXT bytes into that text. Extractors are selected by a
//! pure mapping from the normalized file extension, and operate on in-memory
//! bytes — uploads are never written to disk.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Read;

use crate::errors::AppError;

/// Supported upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    /// Covers both .docx and legacy .doc uploads; legacy binaries that are
    /// not OOXML containers surface an extraction error.
    Docx,
    Txt,
}

impl FileKind {
    /// Pure mapping from a file name's extension to a format, or None when
    /// the format is unsupported.
    pub fn from_file_name(name: &str) -> Option<FileKind> {
        let ext = name.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(FileKind::Pdf),
            "doc" | "docx" => Some(FileKind::Docx),
            "txt" => Some(FileKind::Txt),
            _ => None,
        }
    }
}

/// Capability interface: one implementation per supported format.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, data: &[u8]) -> Result<String, AppError>;
}

/// Returns the extractor for a format. Extractors are stateless, so static
/// instances are shared across requests.
pub fn extractor_for(kind: FileKind) -> &'static dyn TextExtractor {
    match kind {
        FileKind::Pdf => &PdfExtractor,
        FileKind::Docx => &DocxExtractor,
        FileKind::Txt => &PlainTextExtractor,
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| AppError::Extraction(format!("failed to read PDF: {e}")))
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        Ok(String::from_utf8_lossy(data).into_owned())
    }
}

/// XML tags left after paragraph/tab substitution.
static XML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern must compile"));

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    fn extract(&self, data: &[u8]) -> Result<String, AppError> {
        let cursor = std::io::Cursor::new(data);
        let mut archive = zip::ZipArchive::new(cursor)
            .map_err(|e| AppError::Extraction(format!("not a DOCX container: {e}")))?;

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| AppError::Extraction(format!("missing document body: {e}")))?
            .read_to_string(&mut document_xml)
            .map_err(|e| AppError::Extraction(format!("unreadable document body: {e}")))?;

        Ok(strip_document_xml(&document_xml))
    }
}

/// Flattens WordprocessingML to plain text: paragraph ends become newlines,
/// tabs become spaces, remaining tags are stripped, entities unescaped.
fn strip_document_xml(xml: &str) -> String {
    let with_breaks = xml
        .replace("</w:p>", "\n")
        .replace("<w:tab/>", " ")
        .replace("<w:br/>", "\n");

    let text = XML_TAG.replace_all(&with_breaks, "");

    let unescaped = text
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'");

    unescaped
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
