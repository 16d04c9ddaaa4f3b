//! Batch processing - the run entry point.
//!
//! The `App` owns the configured components, walks every source in the
//! folder, collects the classified batch, ranks it and writes the three
//! reports. Only configuration problems and the total absence of source
//! material abort the run; a bad individual source is logged and skipped.

use tracing::{error, info};

use crate::clients::{GeminiClient, SemanticClassifier};
use crate::config::Config;
use crate::error::{AppError, AppResult, FileError};
use crate::infrastructure::{DocumentTextExtractor, PlainTextExtractor};
use crate::models::ClassifiedQuestion;
use crate::orchestrator::source_processor;
use crate::services::report_writer::log_type_stats;
use crate::services::{CriticalityRanker, QuestionSegmenter, ReportWriter, RuleBasedClassifier};
use crate::utils::logging;
use crate::workflow::ClassificationCascade;

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub sources_processed: usize,
    pub sources_failed: usize,
    pub total_questions: usize,
    pub critical_questions: usize,
}

/// Application main structure.
pub struct App<E, S>
where
    E: DocumentTextExtractor,
    S: SemanticClassifier,
{
    config: Config,
    extractor: E,
    segmenter: QuestionSegmenter,
    cascade: ClassificationCascade<S>,
    report_writer: ReportWriter,
}

impl App<PlainTextExtractor, GeminiClient> {
    /// Wire up the production components.
    pub fn initialize(config: Config) -> Self {
        logging::log_startup(&config);

        let remote = GeminiClient::new(&config);
        Self::with_components(config, PlainTextExtractor::new(), remote)
    }
}

impl<E, S> App<E, S>
where
    E: DocumentTextExtractor,
    S: SemanticClassifier,
{
    /// Wire up with explicit collaborators (tests inject stubs here).
    pub fn with_components(config: Config, extractor: E, remote: S) -> Self {
        let segmenter = QuestionSegmenter::new(&config);
        let cascade = ClassificationCascade::new(RuleBasedClassifier::new(), remote);
        let report_writer = ReportWriter::new(&config);

        Self {
            config,
            extractor,
            segmenter,
            cascade,
            report_writer,
        }
    }

    /// Run the full pipeline: extract, segment, classify, rank, export.
    pub async fn run(&self) -> AppResult<RunSummary> {
        let sources = self
            .extractor
            .list_sources(&self.config.source_folder)
            .await?;

        if sources.is_empty() {
            return Err(AppError::File(FileError::NoSources {
                path: self.config.source_folder.clone(),
            }));
        }

        info!("found {} source file(s)", sources.len());

        let mut summary = RunSummary::default();
        let mut questions: Vec<ClassifiedQuestion> = Vec::new();

        for path in &sources {
            match self.extractor.extract(path).await {
                Ok((source_id, text)) => {
                    let batch = source_processor::process_source(
                        &self.segmenter,
                        &self.cascade,
                        &source_id,
                        &text,
                        self.config.display_text_limit,
                        self.config.verbose_logging,
                    )
                    .await;

                    summary.sources_processed += 1;
                    questions.extend(batch);
                }
                Err(e) => {
                    // Forward progress over a multi-year batch beats
                    // failing the whole run on one bad input.
                    error!("skipping {}: {}", path.display(), e);
                    summary.sources_failed += 1;
                }
            }
        }

        summary.total_questions = questions.len();
        info!("analyzed {} questions in total", summary.total_questions);

        let ranker = CriticalityRanker::new();
        let stats = ranker.type_frequencies(&questions);
        let critical = ranker.rank(&questions);
        summary.critical_questions = critical.len();

        self.report_writer.ensure_output_folder().await?;
        self.report_writer.write_questions_csv(&questions).await?;
        self.report_writer.write_type_stats_csv(&stats).await?;
        self.report_writer
            .write_critical_report(&critical, self.config.top_critical_limit)
            .await?;

        log_type_stats(&stats);
        logging::print_final_stats(&summary, &self.config.output_folder);

        Ok(summary)
    }
}
