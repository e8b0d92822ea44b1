//! Error type shared by the page handlers and their browser backends.

/// Failures surfaced by injected handles. None of these are fatal; handlers
/// log them and keep the page usable.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("clipboard api unavailable")]
    ClipboardUnavailable,
    #[error("clipboard write rejected: {0}")]
    ClipboardRejected(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}
