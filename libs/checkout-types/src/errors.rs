use thiserror::Error;

/// Plan or cadence was missing when a checkout was requested.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid plan or cadence selected.")]
pub struct ValidationError;

/// Session token payload could not be read.
///
/// Always recoverable: callers substitute default identity fields and carry on.
#[derive(Debug, Error)]
pub enum TokenDecodeError {
    #[error("Invalid token format: missing payload segment")]
    MissingPayload,

    #[error("Invalid token payload encoding: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid token payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}
