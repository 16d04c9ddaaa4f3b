use anyhow::Result;

use bac_analyzer::orchestrator::App;
use bac_analyzer::utils::logging;
use bac_analyzer::Config;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let mut config = Config::from_env()?;

    // Optional positional argument overriding the source folder.
    if let Some(folder) = std::env::args().nth(1) {
        config.source_folder = folder;
    }

    let summary = App::initialize(config).run().await?;

    tracing::info!(
        "done: {} questions from {} source(s)",
        summary.total_questions,
        summary.sources_processed
    );

    Ok(())
}
