use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use volunteer_match::config::{LoggingSettings, Settings};
use volunteer_match::services::{load_dataset, render};

/// Initialize logging; `LOG_LEVEL` / `LOG_FORMAT` override the configured values
fn init_tracing(logging: &LoggingSettings) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    // Logs go to stderr, the report to stdout
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_tracing(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings.logging);
    info!("Starting volunteer matching run...");

    let dataset_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.dataset.path.clone());

    let Some(dataset_path) = dataset_path else {
        error!("No dataset given: pass a path or set dataset.path");
        return ExitCode::FAILURE;
    };

    let (dataset, stats) = match load_dataset(&dataset_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if stats.total_skipped() > 0 {
        info!("Skipped records: {:?}", stats);
    }

    let matcher = settings.matcher();
    info!(
        "Matcher initialized with weights: {:?}, top {}",
        matcher.weights(),
        matcher.top_k()
    );

    let report = matcher.rank_dataset(&dataset, settings.matching.open_on);
    info!(
        "Ranked {} requests ({} pairs scored)",
        report.total_requests, report.scored_pairs
    );

    match render(&report, settings.output.format) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to render report: {}", e);
            ExitCode::FAILURE
        }
    }
}
