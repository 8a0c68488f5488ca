pub mod catalog;
pub mod diagnose;
