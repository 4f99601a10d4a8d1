// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use rag_stress::driver::suite::print_summary;
use rag_stress::{
    ApiClient, Config, FaqBatch, JsonExporter, Scenario, StepRunner, SuiteReport, SuiteRunner,
    default_suite,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "rag_stress")]
#[command(version = "0.1.0")]
#[command(about = "Step-wise stress harness for a RAG document API", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Override the configured target base URL (e.g. to aim at a staging
    /// instance or a local mock).
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full escalation suite (Warmup / Medium Load / Heavy Load)
    Run {
        /// Directory to write a JSON timing report into
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,
    },

    /// Run a single step at a custom load level
    Step {
        #[arg(long, default_value = "Custom")]
        name: String,

        #[arg(long, value_name = "NUM")]
        docs: u64,

        #[arg(long, value_name = "NUM", default_value_t = 0)]
        start_index: u64,
    },

    /// Print a synthetic batch as JSON without calling the server
    Generate {
        #[arg(long, value_name = "NUM")]
        size: u64,

        #[arg(long, value_name = "NUM", default_value_t = 0)]
        start_index: u64,

        #[arg(short, long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    rag_stress::utils::logging::init_logger(cli.color, cli.verbose);

    let mut config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    if let Some(base_url) = cli.base_url {
        config.target.base_url = base_url;
    }

    match cli.command {
        Commands::Run { output, pretty } => {
            cmd_run(&config, output, pretty).await?;
        }
        Commands::Step {
            name,
            docs,
            start_index,
        } => {
            cmd_step(&config, &name, docs, start_index).await;
        }
        Commands::Generate {
            size,
            start_index,
            pretty,
        } => {
            cmd_generate(size, start_index, pretty)?;
        }
    }

    Ok(())
}

async fn cmd_run(config: &Config, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    println!("{}", "🚀 STARTING STEP-WISE STRESS TEST".bold());
    info!("Target: {}", config.target.base_url);

    let scenarios = default_suite();
    let suite = build_suite(config);

    // Step failures are reported per step; only a misconfigured suite (for
    // instance overlapping index ranges) is a hard error here.
    let results = suite
        .run(&scenarios)
        .await
        .context("Suite setup failed")?;

    print_summary(&results);

    if let Some(dir) = output {
        let report = SuiteReport::new(&config.target.base_url, &results);
        let exporter = JsonExporter::new(dir)?;
        let path = exporter.export_report(&report, pretty)?;
        println!("Report: {}", path.display());
    }

    Ok(())
}

async fn cmd_step(config: &Config, name: &str, docs: u64, start_index: u64) {
    info!("Target: {}", config.target.base_url);

    let scenario = Scenario::new(name, docs, start_index);
    let runner = step_runner(config);
    runner
        .run(&scenario.name, scenario.doc_count, scenario.start_index)
        .await;
}

fn cmd_generate(size: u64, start_index: u64, pretty: bool) -> Result<()> {
    let batch = FaqBatch::generate(size, start_index);
    let json = if pretty {
        serde_json::to_string_pretty(&batch)?
    } else {
        serde_json::to_string(&batch)?
    };
    println!("{json}");
    Ok(())
}

fn step_runner(config: &Config) -> StepRunner {
    StepRunner::new(ApiClient::new(&config.target), &config.target.api_key)
}

fn build_suite(config: &Config) -> SuiteRunner {
    SuiteRunner::new(step_runner(config), config.suite.pause_secs)
}
