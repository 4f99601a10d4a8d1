// file: src/driver/scenario.rs
// description: load scenarios and index-range overlap validation

use crate::error::{HarnessError, Result};
use std::ops::Range;

/// One load level: how many documents to upload and where their indices start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub doc_count: u64,
    pub start_index: u64,
}

impl Scenario {
    pub fn new(name: impl Into<String>, doc_count: u64, start_index: u64) -> Self {
        Self {
            name: name.into(),
            doc_count,
            start_index,
        }
    }

    /// Half-open range of document indices this scenario will upload.
    pub fn index_range(&self) -> Range<u64> {
        self.start_index..self.start_index + self.doc_count
    }
}

/// The fixed escalation sequence. Warmup lets the server JIT and pool
/// connections, medium exercises larger JSON bodies, heavy probes whether
/// the embedding model slows down or times out.
pub fn default_suite() -> Vec<Scenario> {
    vec![
        Scenario::new("Warmup", 50, 0),
        Scenario::new("Medium Load", 500, 100),
        Scenario::new("Heavy Load", 2000, 1000),
    ]
}

/// Document counts accumulate on the server across steps, so overlapping
/// index ranges would silently re-upload the same documents and skew every
/// per-document measurement. Reject them up front instead of trusting the
/// caller to have picked offsets carefully.
pub fn validate_non_overlapping(scenarios: &[Scenario]) -> Result<()> {
    for (i, a) in scenarios.iter().enumerate() {
        for b in &scenarios[i + 1..] {
            let (ra, rb) = (a.index_range(), b.index_range());
            if ra.start < rb.end && rb.start < ra.end {
                return Err(HarnessError::Validation(format!(
                    "scenarios '{}' ({:?}) and '{}' ({:?}) have overlapping index ranges",
                    a.name, ra, b.name, rb
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_suite_shape() {
        let suite = default_suite();
        assert_eq!(suite.len(), 3);
        assert_eq!(suite[0], Scenario::new("Warmup", 50, 0));
        assert_eq!(suite[1], Scenario::new("Medium Load", 500, 100));
        assert_eq!(suite[2], Scenario::new("Heavy Load", 2000, 1000));
    }

    #[test]
    fn test_default_suite_ranges_do_not_overlap() {
        assert!(validate_non_overlapping(&default_suite()).is_ok());
    }

    #[test]
    fn test_overlap_detected() {
        let scenarios = vec![
            Scenario::new("a", 100, 0),
            Scenario::new("b", 100, 50),
        ];
        let err = validate_non_overlapping(&scenarios).unwrap_err();
        assert!(err.to_string().contains("overlapping"));
    }

    #[test]
    fn test_adjacent_ranges_allowed() {
        let scenarios = vec![
            Scenario::new("a", 100, 0),
            Scenario::new("b", 100, 100),
        ];
        assert!(validate_non_overlapping(&scenarios).is_ok());
    }

    #[test]
    fn test_empty_scenario_never_overlaps() {
        let scenarios = vec![
            Scenario::new("a", 0, 50),
            Scenario::new("b", 100, 0),
        ];
        assert!(validate_non_overlapping(&scenarios).is_ok());
    }
}
