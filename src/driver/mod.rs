// file: src/driver/mod.rs
// description: stress driver module exports
// reference: internal module structure

pub mod scenario;
pub mod step;
pub mod suite;

pub use scenario::{Scenario, default_suite, validate_non_overlapping};
pub use step::StepRunner;
pub use suite::{SuiteResult, SuiteRunner};
