use std::io;

use thiserror::Error;

/// Library-wide error type for diagville operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Remote backend selected without a credential available.
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    /// Challenge name is not part of the fixed enumeration.
    #[error("Unknown challenge '{name}'. Available: {available}")]
    InvalidChallenge { name: String, available: String },

    /// Priority name is not part of the fixed enumeration.
    #[error("Unknown priority '{name}'. Available: {available}")]
    InvalidPriority { name: String, available: String },

    /// Backend selector is not one of the two known engines.
    #[error("Unknown backend '{0}': must be 'remote' or 'local'")]
    InvalidBackend(String),

    /// Population below the configured floor, rejected at the input boundary.
    #[error("Population {population} is below the configured minimum of {floor}")]
    PopulationBelowFloor { population: u64, floor: u64 },

    /// Report generation failed in the selected backend.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Typed failure reason from a report backend.
///
/// Callers decide how to surface this; the backends never turn a failure
/// into report text themselves.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// The request never produced an HTTP response (connect, TLS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("API error ({status}): {detail}")]
    Api { status: u16, detail: String },

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The completion came back without any choice.
    #[error("completion response contained no choices")]
    EmptyCompletion,

    /// The report template failed to render.
    #[error("template render failure: {0}")]
    Template(String),
}
