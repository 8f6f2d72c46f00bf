//! # dossier-extract — Text Extraction Boundary
//!
//! The boundary between uploaded dossier files and the analysis pipeline.
//! The pipeline only ever sees extracted text; this crate owns the
//! file-kind detection and the decoding rules.
//!
//! ## Scope
//!
//! Real PDF and DOCX text recovery is an external collaborator concern and
//! deliberately out of scope here: those kinds yield an EMPTY string, a
//! documented quirk of the inherited behavior rather than an error. The
//! caller is expected to surface a warning at the boundary instead of
//! silently diffing against nothing — `dossier-cli` does exactly that.
//! Plain text is decoded as UTF-8 verbatim.

use std::path::Path;

use thiserror::Error;

/// Error at the text-extraction boundary.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A plain-text document was not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The document file could not be read.
    #[error("cannot read document {path}: {reason}")]
    Io {
        /// Path of the unreadable document.
        path: String,
        /// Underlying IO failure.
        reason: String,
    },
}

/// Supported upload kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Portable Document Format — extraction delegated, yields empty text.
    Pdf,
    /// Office Open XML document — extraction delegated, yields empty text.
    Docx,
    /// Plain UTF-8 text, decoded verbatim.
    Txt,
}

impl DocumentKind {
    /// Detect the kind from a file extension, ASCII case-insensitive.
    ///
    /// Returns `None` for unknown or missing extensions; the caller
    /// decides how loudly to degrade.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
        };
        f.write_str(name)
    }
}

/// Extract raw text from document bytes.
///
/// - `Txt` decodes the bytes as UTF-8 text verbatim.
/// - `Pdf` and `Docx` yield an empty string: their extraction lives in an
///   external collaborator, and the inherited contract is empty text, not
///   an error.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidUtf8`] when a plain-text document is not
/// valid UTF-8.
pub fn extract(kind: DocumentKind, bytes: Vec<u8>) -> Result<String, ExtractError> {
    match kind {
        DocumentKind::Txt => Ok(String::from_utf8(bytes)?),
        DocumentKind::Pdf | DocumentKind::Docx => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    // ---- from_path ----

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("manual.txt")),
            Some(DocumentKind::Txt)
        );
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("dossier.pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("variation.docx")),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_is_case_insensitive() {
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("MANUAL.TXT")),
            Some(DocumentKind::Txt)
        );
        assert_eq!(
            DocumentKind::from_path(&PathBuf::from("Dossier.Pdf")),
            Some(DocumentKind::Pdf)
        );
    }

    #[test]
    fn test_unknown_or_missing_extension() {
        assert_eq!(DocumentKind::from_path(&PathBuf::from("notes.md")), None);
        assert_eq!(DocumentKind::from_path(&PathBuf::from("no_extension")), None);
    }

    // ---- extract ----

    #[test]
    fn test_txt_decodes_utf8_verbatim() {
        let text = extract(DocumentKind::Txt, "línea 1\nlínea 2".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "línea 1\nlínea 2");
    }

    #[test]
    fn test_txt_rejects_invalid_utf8() {
        let err = extract(DocumentKind::Txt, vec![0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUtf8(_)));
    }

    #[test]
    fn test_delegated_kinds_yield_empty_text() {
        assert_eq!(extract(DocumentKind::Pdf, vec![1, 2, 3]).unwrap(), "");
        assert_eq!(extract(DocumentKind::Docx, vec![4, 5, 6]).unwrap(), "");
    }
}
