//! Parley error types

/// Parley error types
#[derive(Debug, thiserror::Error)]
pub enum ParleyError {
    // Role resolution errors
    /// Role string in an API response message is not a known role.
    #[error("unrecognized role: {0}")]
    UnrecognizedRole(String),

    /// Caller-supplied role string is not a known role.
    #[error("invalid enum value '{0}' for ChatRole")]
    InvalidEnumValue(String),

    // Function call errors
    /// Arguments of function call `name` are not a JSON object; `reason`
    /// carries the decoder message.
    #[error("failed to decode arguments of function call '{name}': {reason}")]
    FunctionCallDecoding { name: String, reason: String },

    // Completion body errors
    #[error("empty response from model")]
    EmptyResponse,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Parley operations
pub type Result<T> = std::result::Result<T, ParleyError>;
