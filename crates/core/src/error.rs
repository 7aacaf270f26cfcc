//! Error types for masthead document structure analysis.

use thiserror::Error;

/// Primary error type for structure analysis operations.
///
/// The header/footer detector itself never produces one of these; errors come
/// from content extraction, cleanup, settings validation and the margin/section
/// stage, and abort the whole run.
#[derive(Error, Debug)]
pub enum StructureError {
    #[error("page not found: {0}")]
    PageNotFound(usize),

    #[error("invalid block {index} on page {page}: {msg}")]
    InvalidBlock {
        page: usize,
        index: usize,
        msg: String,
    },

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("content source error: {0}")]
    Source(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for StructureError.
pub type Result<T> = std::result::Result<T, StructureError>;
