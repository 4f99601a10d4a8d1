// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod exporter;
pub mod models;
pub mod utils;

pub use client::ApiClient;
pub use config::{Config, SuiteConfig, TargetConfig};
pub use driver::{Scenario, StepRunner, SuiteResult, SuiteRunner, default_suite};
pub use error::{HarnessError, Result};
pub use exporter::{JsonExporter, StepReport, SuiteReport};
pub use models::{ChatRequest, FaqBatch, FaqEntry, Phase, PhaseFailure, StepOutcome, StepTimings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _batch = FaqBatch::generate(1, 0);
    }
}
