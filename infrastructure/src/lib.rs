//! Infrastructure layer for rent-quorum
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: HTTP answer providers, the JSON report
//! sink, and configuration file loading.

pub mod config;
pub mod providers;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use providers::{ProviderError, RoutingAnswerProvider};
pub use report::JsonFileReportSink;
