// file: src/models/outcome.rs
// description: per-step phase timings and typed step outcome

use std::time::Duration;

/// Wall-clock durations for the three phases of one step. Computed within a
/// single step invocation and only kept around for printing and reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepTimings {
    pub upload: Duration,
    pub index: Duration,
    pub search: Duration,
}

impl StepTimings {
    /// Normalized per-document cost in milliseconds for a batch phase.
    pub fn per_doc_ms(duration: Duration, doc_count: u64) -> f64 {
        if doc_count == 0 {
            return 0.0;
        }
        duration.as_secs_f64() / doc_count as f64 * 1000.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Upload,
    Index,
    Search,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Upload => "upload",
            Phase::Index => "index",
            Phase::Search => "search",
        }
    }
}

/// Why a phase aborted its step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseFailure {
    /// Server unreachable (connection refused, DNS, etc).
    Connection(String),
    /// Non-200 response; body kept for the console message.
    Status { status: u16, body: String },
}

/// Typed result of one generate/upload/index/search cycle. A failed upload or
/// index aborts the step; a failed search does not, the step still completes
/// with all three timings recorded and the search status kept for reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Completed {
        timings: StepTimings,
        search_status: u16,
    },
    Aborted {
        phase: Phase,
        failure: PhaseFailure,
    },
}

impl StepOutcome {
    pub fn timings(&self) -> Option<&StepTimings> {
        match self {
            StepOutcome::Completed { timings, .. } => Some(timings),
            StepOutcome::Aborted { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, StepOutcome::Completed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_per_doc_ms() {
        let duration = Duration::from_secs(1);
        assert!((StepTimings::per_doc_ms(duration, 500) - 2.0).abs() < f64::EPSILON);
        assert_eq!(StepTimings::per_doc_ms(duration, 0), 0.0);
    }

    #[test]
    fn test_aborted_has_no_timings() {
        let outcome = StepOutcome::Aborted {
            phase: Phase::Upload,
            failure: PhaseFailure::Connection("connection refused".to_string()),
        };
        assert!(outcome.timings().is_none());
        assert!(!outcome.is_completed());
    }
}
