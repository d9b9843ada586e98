//! Report persistence adapters

mod json_sink;

pub use json_sink::JsonFileReportSink;
