// file: src/exporter/mod.rs
// description: report export module exports
// reference: internal module structure

pub mod json;

pub use json::{JsonExporter, StepReport, SuiteReport};
