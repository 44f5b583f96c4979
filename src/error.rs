// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("JSON error: {0}")]
    Json(String),
    #[error("top-level JSON value is not an object")]
    NotAnObject,
    #[error("missing or non-string `path` field")]
    MissingPath,
    #[error("`headers` must be an object with string values")]
    BadHeaders,
}
