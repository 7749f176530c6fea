use thiserror::Error;

/// Errors emitted by the certifications panel.
#[derive(Debug, Error)]
pub(crate) enum CertificationsError {
    /// Filesystem operation failed.
    #[error("certifications IO failed")]
    Io(#[from] std::io::Error),
    /// JSON serialization failed.
    #[error("certifications JSON failed")]
    Json(#[from] serde_json::Error),
    /// The form content was rejected.
    #[error("{0}")]
    Validation(String),
}
