use super::ParseMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unsupported file type for {mode} parsing: {extension}")]
    UnsupportedFileType { extension: String, mode: ParseMode },

    #[error("Missing dependency: {0}")]
    MissingDependency(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX package: {0}")]
    Docx(String),

    #[error("Parser is not configured for {expected} parsing")]
    WrongMode { expected: ParseMode },
}

impl ParseError {
    pub(crate) fn structured_unavailable() -> Self {
        ParseError::MissingDependency(
            "structured partitioning not compiled in. Rebuild with the `structured` feature or use flat parsing."
                .to_string(),
        )
    }
}
