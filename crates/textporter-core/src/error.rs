use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TextporterError {
    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to parse style data: {0}")]
    ParseError(String),

    #[error("failed to load style file {path}: {reason}")]
    StyleFileLoad { path: PathBuf, reason: String },

    #[error("invalid page range: {0}")]
    InvalidPageRange(String),

    #[error("unsupported page selection: {0}")]
    UnsupportedPageSelection(String),

    #[error("style '{0}' is protected and cannot be removed")]
    ProtectedStyle(String),

    #[error("invalid style: {0}")]
    InvalidStyle(String),

    #[error("failed to load config from {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
