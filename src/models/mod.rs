// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod chat;
pub mod document;
pub mod outcome;

pub use chat::{ChatRequest, ChatTurn};
pub use document::{FaqBatch, FaqEntry};
pub use outcome::{Phase, PhaseFailure, StepOutcome, StepTimings};
