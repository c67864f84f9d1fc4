//! Reference document text extraction (rubrics and the CARR template).
//!
//! Reference PDFs live in one directory: `{docs_dir}/{dimension}.pdf` per
//! dimension plus a single template file. Their text is opaque prompt input.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

pub const TEMPLATE_FILE_NAME: &str = "Career Acceleration Readiness Report Template.pdf";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to extract text from {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("extraction task failed: {0}")]
    Join(String),
}

/// Reads the text content of a reference document.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

/// `pdf-extract` backed extractor. Parsing runs on a blocking thread.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = tokio::fs::read(path).await.map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let owned_path = path.to_path_buf();
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf {
                path: owned_path,
                message: e.to_string(),
            })
        })
        .await
        .map_err(|e| ExtractError::Join(e.to_string()))?
    }
}

/// Locations of the reference documents.
#[derive(Debug, Clone)]
pub struct ReferenceDocs {
    dir: PathBuf,
}

impl ReferenceDocs {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.join(TEMPLATE_FILE_NAME)
    }

    /// Rubric for one dimension, named after the dimension as submitted.
    ///
    /// Callers check the name with [`is_valid_dimension_name`] first.
    pub fn rubric_path(&self, dimension: &str) -> PathBuf {
        self.dir.join(format!("{dimension}.pdf"))
    }
}

/// True if `dimension` names a single file inside the docs directory: not blank,
/// no path separators, no `..`, no leading `.`, no control characters.
pub fn is_valid_dimension_name(dimension: &str) -> bool {
    !dimension.trim().is_empty()
        && !dimension.starts_with('.')
        && !dimension.contains("..")
        && !dimension
            .chars()
            .any(|c| c == '/' || c == '\\' || c.is_control())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_paths() {
        let docs = ReferenceDocs::new("./CARR Docs");
        assert_eq!(
            docs.template_path(),
            PathBuf::from("./CARR Docs/Career Acceleration Readiness Report Template.pdf")
        );
        assert_eq!(
            docs.rubric_path("Clarity"),
            PathBuf::from("./CARR Docs/Clarity.pdf")
        );
    }

    #[test]
    fn test_dimension_names_accepted() {
        for name in ["Clarity", "Ownership & Drive", "Self-Awareness", "Role Fit 2"] {
            assert!(is_valid_dimension_name(name), "{name}");
        }
    }

    #[test]
    fn test_dimension_names_that_leave_docs_dir_rejected() {
        for name in [
            "../../../home/secret/contract",
            "..",
            "sub/Clarity",
            "sub\\Clarity",
            "/etc/passwd",
            ".hidden",
            "Clar\0ity",
            "",
            "   ",
        ] {
            assert!(!is_valid_dimension_name(name), "{name:?}");
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PdfTextExtractor
            .extract_text(&dir.path().join("missing.pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
        assert!(err.to_string().contains("missing.pdf"));
    }

    #[tokio::test]
    async fn test_non_pdf_is_extraction_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Clarity.pdf");
        std::fs::write(&path, b"this is not a pdf").unwrap();
        let err = PdfTextExtractor.extract_text(&path).await.unwrap_err();
        assert!(matches!(
            err,
            ExtractError::Pdf { .. } | ExtractError::Join(_)
        ));
    }
}
