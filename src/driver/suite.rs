// file: src/driver/suite.rs
// description: sequential scenario execution with settle pauses between steps

use crate::driver::scenario::{Scenario, validate_non_overlapping};
use crate::driver::step::StepRunner;
use crate::error::Result;
use crate::models::StepOutcome;
use crate::utils::logging::{format_step, format_success, format_warning};
use std::time::Duration;
use tracing::info;

/// Outcome of one scenario, kept for the summary and the optional report.
#[derive(Debug, Clone)]
pub struct SuiteResult {
    pub scenario: Scenario,
    pub outcome: StepOutcome,
}

/// Runs scenarios strictly in order, one HTTP call at a time. A failed step
/// does not stop the suite; server state is cumulative across steps, which is
/// why overlapping index ranges are rejected before anything is sent.
pub struct SuiteRunner {
    runner: StepRunner,
    pause: Duration,
}

impl SuiteRunner {
    pub fn new(runner: StepRunner, pause_secs: u64) -> Self {
        Self {
            runner,
            pause: Duration::from_secs(pause_secs),
        }
    }

    pub async fn run(&self, scenarios: &[Scenario]) -> Result<Vec<SuiteResult>> {
        validate_non_overlapping(scenarios)?;

        let mut results = Vec::with_capacity(scenarios.len());

        for (i, scenario) in scenarios.iter().enumerate() {
            if i > 0 && !self.pause.is_zero() {
                info!("Pausing {:?} to let prior load settle", self.pause);
                tokio::time::sleep(self.pause).await;
            }

            println!(
                "{}",
                format_step(i + 1, scenarios.len(), &scenario.name)
            );

            let outcome = self
                .runner
                .run(&scenario.name, scenario.doc_count, scenario.start_index)
                .await;

            results.push(SuiteResult {
                scenario: scenario.clone(),
                outcome,
            });
        }

        Ok(results)
    }
}

/// Console summary once every step has run.
pub fn print_summary(results: &[SuiteResult]) {
    println!("\n{}", "=".repeat(60));
    println!("Suite Summary");
    println!("{}", "=".repeat(60));

    for result in results {
        match &result.outcome {
            StepOutcome::Completed {
                timings,
                search_status,
            } => {
                let line = format!(
                    "{:<12} {:>5} docs | upload {:.4}s | index {:.4}s | search {:.4}s",
                    result.scenario.name,
                    result.scenario.doc_count,
                    timings.upload.as_secs_f64(),
                    timings.index.as_secs_f64(),
                    timings.search.as_secs_f64(),
                );
                if *search_status == 200 {
                    println!("{}", format_success(&line));
                } else {
                    println!(
                        "{}",
                        format_warning(&format!("{line} (search returned {search_status})"))
                    );
                }
            }
            StepOutcome::Aborted { phase, failure } => {
                println!(
                    "{}",
                    format_warning(&format!(
                        "{:<12} aborted during {}: {:?}",
                        result.scenario.name,
                        phase.name(),
                        failure
                    ))
                );
            }
        }
    }
}
