mod completion_http;
mod template_report;

pub use completion_http::HttpCompletionBackend;
pub use template_report::TemplateReportBackend;
