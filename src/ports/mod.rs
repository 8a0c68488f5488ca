mod report_backend;

pub use report_backend::{Report, ReportBackend};

#[cfg(test)]
pub(crate) use report_backend::testing;
