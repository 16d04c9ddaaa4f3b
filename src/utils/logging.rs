//! Logging helpers.

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::orchestrator::RunSummary;

/// Initialize the global tracing subscriber.
///
/// Defaults to `info`; override with `RUST_LOG`. Safe to call more than
/// once (later calls are no-ops), which keeps tests simple.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .ok();
}

/// Log the startup banner.
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("bac question analyzer - starting");
    info!("source folder: {}", config.source_folder);
    info!("output folder: {}", config.output_folder);
    info!("semantic model: {}", config.gemini_model_name);
    info!("{}", "=".repeat(60));
}

/// Log the closing statistics.
pub fn print_final_stats(summary: &RunSummary, output_folder: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "finished: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!(
        "sources: {} processed, {} skipped",
        summary.sources_processed, summary.sources_failed
    );
    info!("questions analyzed: {}", summary.total_questions);
    info!("critical questions: {}", summary.critical_questions);
    info!("reports saved to: {}", output_folder);
    info!("{}", "=".repeat(60));
}

/// Truncate long text for log display.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
