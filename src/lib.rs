//! diagville: Generate city diagnostic reports from a remote completion
//! model or a local deterministic template.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use app::commands::{catalog, diagnose};

pub use app::commands::diagnose::{DiagnoseOptions, DiagnoseOutcome};
pub use domain::{AppError, GenerationError};

/// Run one diagnosis: collect or parse the request fields, dispatch to the
/// selected backend, and return the display text.
pub fn diagnose(options: DiagnoseOptions) -> Result<DiagnoseOutcome, AppError> {
    diagnose::execute(&options)
}

/// List the fixed challenge and priority enumerations.
pub fn catalog() -> String {
    catalog::execute()
}
