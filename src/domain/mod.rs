pub mod config;
pub mod error;
pub mod prompt;
pub mod request;

pub use config::{CompletionApiConfig, ReportConfig};
pub use error::{AppError, GenerationError};
pub use request::{
    BackendKind, Challenge, DEFAULT_CHALLENGES, DEFAULT_PRIORITIES, DiagnosticRequest, Priority,
    format_thousands,
};
