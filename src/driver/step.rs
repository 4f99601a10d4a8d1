// file: src/driver/step.rs
// description: single generate/upload/index/search cycle with per-phase timing

use crate::client::ApiClient;
use crate::error::HarnessError;
use crate::models::{ChatRequest, FaqBatch, Phase, PhaseFailure, StepOutcome, StepTimings};
use crate::utils::PhaseTimer;
use crate::utils::logging::format_error;
use colored::Colorize;
use reqwest::StatusCode;
use tracing::warn;

/// Runs one test step against the target API. Phases are strictly sequential
/// and each one is gated on the previous succeeding; a failed upload or index
/// aborts the step without touching the remaining endpoints.
pub struct StepRunner {
    client: ApiClient,
    api_key: String,
}

impl StepRunner {
    pub fn new(client: ApiClient, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
        }
    }

    pub async fn run(&self, name: &str, doc_count: u64, start_index: u64) -> StepOutcome {
        println!(
            "\n--- 🧪 {}: Testing with {} Documents ---",
            name.bold(),
            doc_count
        );

        let batch = FaqBatch::generate(doc_count, start_index);

        // Upload: measures raw API ingestion latency.
        let timer = PhaseTimer::start("upload");
        if let Err(err) = self.client.upload_faq(&batch).await {
            return Self::abort(Phase::Upload, err);
        }
        let upload = timer.finish();
        println!(
            "📤 Upload Time:   {:.4}s ({:.2}ms per doc)",
            upload.as_secs_f64(),
            StepTimings::per_doc_ms(upload, doc_count)
        );

        // Index: measures server-side embedding generation.
        println!("🧠 Indexing (Generating Embeddings)...");
        let timer = PhaseTimer::start("index");
        if let Err(err) = self.client.trigger_index().await {
            return Self::abort(Phase::Index, err);
        }
        let index = timer.finish();
        println!(
            "⚙️ Indexing Time: {:.4}s ({:.2}ms per doc)",
            index.as_secs_f64(),
            StepTimings::per_doc_ms(index, doc_count)
        );

        // Search: one retrieval query about the middle document of the batch,
        // measuring RAG latency at the current corpus size.
        let request = ChatRequest::about_middle_document(&self.api_key, doc_count, start_index);
        let timer = PhaseTimer::start("search");
        let status = match self.client.chat_search(&request).await {
            Ok(status) => status,
            Err(err) => return Self::abort(Phase::Search, err),
        };
        let search = timer.finish();

        if status == StatusCode::OK {
            println!("🔍 Search Time:   {:.4}s", search.as_secs_f64());
        } else {
            // Final phase: report the code and keep the timings anyway.
            println!("{}", format_error(&format!("Search Failed: {}", status.as_u16())));
        }

        StepOutcome::Completed {
            timings: StepTimings {
                upload,
                index,
                search,
            },
            search_status: status.as_u16(),
        }
    }

    fn abort(phase: Phase, err: HarnessError) -> StepOutcome {
        let failure = match err {
            HarnessError::Connection(detail) => {
                println!(
                    "{}",
                    format_error("Connection Refused. Is the server running?")
                );
                PhaseFailure::Connection(detail)
            }
            HarnessError::UnexpectedStatus { status, body } => {
                println!(
                    "{}",
                    format_error(&format!("{} Failed: {}", title(phase), body))
                );
                PhaseFailure::Status { status, body }
            }
            other => {
                println!(
                    "{}",
                    format_error(&format!("{} Failed: {}", title(phase), other))
                );
                PhaseFailure::Connection(other.to_string())
            }
        };

        warn!("Step aborted during {} phase", phase.name());
        StepOutcome::Aborted { phase, failure }
    }
}

fn title(phase: Phase) -> &'static str {
    match phase {
        Phase::Upload => "Upload",
        Phase::Index => "Indexing",
        Phase::Search => "Search",
    }
}
