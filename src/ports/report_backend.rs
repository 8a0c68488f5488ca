//! Report backend port definition.

use crate::domain::{DiagnosticRequest, GenerationError};

/// The text artifact returned to the user, structured into five fixed
/// sections. Not parsed or validated before display.
#[derive(Debug, Clone)]
pub struct Report {
    /// Rendered report text.
    pub body: String,
}

/// Port for turning a diagnostic request into report text.
///
/// One implementation per engine; the dispatch site picks an implementation
/// from the request's backend selector, so adding an engine never touches
/// the call site.
pub trait ReportBackend {
    /// Generate a report for the given request.
    fn generate(&self, request: &DiagnosticRequest) -> Result<Report, GenerationError>;
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Backend double that returns a canned outcome.
    pub struct FixedBackend(pub Result<String, GenerationError>);

    impl ReportBackend for FixedBackend {
        fn generate(&self, _request: &DiagnosticRequest) -> Result<Report, GenerationError> {
            self.0.clone().map(|body| Report { body })
        }
    }
}
