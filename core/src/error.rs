//! Error types for the users client core.
//!
//! # Design
//! Every non-2xx response lands in `ApiError::Network`, 404 included; callers
//! never branch on "not found". Validation failures are a separate type
//! because they are reported on the surface and never leave the controller.

use thiserror::Error;

/// Errors raised while building, sending or parsing a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("network response was not ok: HTTP {status}")]
    Network { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Rejections of the get-one id input. The messages are shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Id should not be empty")]
    Empty,

    #[error("Id should be between 1 and {max}")]
    OutOfRange { max: u64 },
}

/// Errors surfaced by `InteractionController::dispatch`.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no action bound to trigger `{0}`")]
    UnboundTrigger(String),

    #[error("action for `{trigger}` failed: {source}")]
    Action {
        trigger: String,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Invalid(#[from] serde_json::Error),
}
