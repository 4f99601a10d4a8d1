// file: src/exporter/json.rs
// description: json export of suite timing reports

use crate::driver::SuiteResult;
use crate::error::Result;
use crate::models::StepOutcome;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub started_at: String,
    pub base_url: String,
    pub steps: Vec<StepReport>,
}

/// Flattened step outcome. Timings are seconds; absent when the step aborted
/// before the corresponding phase ran.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub name: String,
    pub doc_count: u64,
    pub start_index: u64,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl SuiteReport {
    pub fn new(base_url: impl Into<String>, results: &[SuiteResult]) -> Self {
        Self {
            started_at: Utc::now().to_rfc3339(),
            base_url: base_url.into(),
            steps: results.iter().map(StepReport::from_result).collect(),
        }
    }
}

impl StepReport {
    fn from_result(result: &SuiteResult) -> Self {
        let scenario = &result.scenario;
        match &result.outcome {
            StepOutcome::Completed {
                timings,
                search_status,
            } => Self {
                name: scenario.name.clone(),
                doc_count: scenario.doc_count,
                start_index: scenario.start_index,
                status: "completed".to_string(),
                upload_secs: Some(timings.upload.as_secs_f64()),
                index_secs: Some(timings.index.as_secs_f64()),
                search_secs: Some(timings.search.as_secs_f64()),
                search_status: Some(*search_status),
                failure: None,
            },
            StepOutcome::Aborted { phase, failure } => Self {
                name: scenario.name.clone(),
                doc_count: scenario.doc_count,
                start_index: scenario.start_index,
                status: format!("aborted_{}", phase.name()),
                upload_secs: None,
                index_secs: None,
                search_secs: None,
                search_status: None,
                failure: Some(format!("{failure:?}")),
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Write the report to `stress_report_{timestamp}.json` and return the path.
    pub fn export_report(&self, report: &SuiteReport, pretty: bool) -> Result<PathBuf> {
        let filename = format!(
            "stress_report_{}.json",
            Utc::now().format("%Y%m%d_%H%M%S")
        );
        let path = self.output_dir.join(filename);

        let contents = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        fs::write(&path, contents)?;

        info!("Report written to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::Scenario;
    use crate::models::{Phase, PhaseFailure, StepTimings};
    use std::time::Duration;
    use tempfile::tempdir;

    fn sample_results() -> Vec<SuiteResult> {
        vec![
            SuiteResult {
                scenario: Scenario::new("Warmup", 50, 0),
                outcome: StepOutcome::Completed {
                    timings: StepTimings {
                        upload: Duration::from_millis(120),
                        index: Duration::from_millis(800),
                        search: Duration::from_millis(45),
                    },
                    search_status: 200,
                },
            },
            SuiteResult {
                scenario: Scenario::new("Medium Load", 500, 100),
                outcome: StepOutcome::Aborted {
                    phase: Phase::Upload,
                    failure: PhaseFailure::Status {
                        status: 500,
                        body: "boom".to_string(),
                    },
                },
            },
        ]
    }

    #[test]
    fn test_report_shape() {
        let report = SuiteReport::new("http://localhost:8080/api", &sample_results());
        assert_eq!(report.steps.len(), 2);

        assert_eq!(report.steps[0].status, "completed");
        assert_eq!(report.steps[0].search_status, Some(200));
        assert!(report.steps[0].upload_secs.unwrap() > 0.0);

        assert_eq!(report.steps[1].status, "aborted_upload");
        assert!(report.steps[1].upload_secs.is_none());
        assert!(report.steps[1].failure.as_deref().unwrap().contains("boom"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();
        let report = SuiteReport::new("http://localhost:8080/api", &sample_results());

        let path = exporter.export_report(&report, true).unwrap();
        assert!(path.exists());

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["steps"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["base_url"], "http://localhost:8080/api");
    }
}
