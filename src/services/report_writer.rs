//! Report writing - the export side of the pipeline.
//!
//! Produces the three flat exports: the per-question table, the
//! type-frequency table, and the ranked critical-questions report.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{ClassifiedQuestion, CriticalQuestionEntry, TypeFrequency};

/// Report writer.
///
/// Owns the output folder only; performs no computation on the records it
/// receives.
pub struct ReportWriter {
    output_folder: PathBuf,
}

impl ReportWriter {
    pub fn new(config: &Config) -> Self {
        Self::with_folder(&config.output_folder)
    }

    pub fn with_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: folder.into(),
        }
    }

    /// Create the output folder if it does not exist yet.
    pub async fn ensure_output_folder(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| {
                AppError::file_write_failed(self.output_folder.display().to_string(), e)
            })
    }

    /// Write `questions_analysis.csv`: one row per classified question.
    pub async fn write_questions_csv(
        &self,
        questions: &[ClassifiedQuestion],
    ) -> AppResult<PathBuf> {
        let mut csv = String::from("year,question_id,question_text,question_type,is_composite\n");
        for q in questions {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                csv_field(&q.source_id),
                csv_field(&q.local_id),
                csv_field(&q.question_text),
                q.question_type,
                q.is_composite,
            ));
        }

        self.write_file("questions_analysis.csv", &with_bom(csv))
            .await
    }

    /// Write `question_type_stats.csv`: the frequency table, already sorted
    /// descending by the caller.
    pub async fn write_type_stats_csv(&self, stats: &[TypeFrequency]) -> AppResult<PathBuf> {
        let mut csv = String::from("question_type,frequency,probability_percentage\n");
        for s in stats {
            csv.push_str(&format!(
                "{},{},{:.2}\n",
                s.question_type, s.frequency, s.probability_percentage
            ));
        }

        self.write_file("question_type_stats.csv", &with_bom(csv))
            .await
    }

    /// Write `critical_questions.txt`: the ranked plain-text report,
    /// limited to the `top` highest-scoring entries.
    pub async fn write_critical_report(
        &self,
        entries: &[CriticalQuestionEntry],
        top: usize,
    ) -> AppResult<PathBuf> {
        let rule = "=".repeat(80);
        let thin_rule = "-".repeat(80);

        let mut report = format!(
            "{rule}\nCritical questions - most important for revision\nGenerated: {}\n{rule}\n\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        );

        for (i, entry) in entries.iter().take(top).enumerate() {
            report.push_str(&format!(
                "\n{rule}\n#{rank} | year: {year} | question: {id}\ntype: {qtype} | importance: {score}\nreason: {reasons}\n{thin_rule}\n{text}\n",
                rank = i + 1,
                year = entry.source_id,
                id = entry.local_id,
                qtype = entry.question_type,
                score = entry.importance_score,
                reasons = entry.reasons.join(" | "),
                text = entry.question_text,
            ));
        }

        report.push_str(&format!(
            "\n{rule}\nTotal critical questions: {}\n",
            entries.len()
        ));

        self.write_file("critical_questions.txt", &report).await
    }

    async fn write_file(&self, name: &str, content: &str) -> AppResult<PathBuf> {
        let path = self.output_folder.join(name);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        debug!("wrote {} ({} bytes)", path.display(), content.len());
        info!("saved: {}", name);
        Ok(path)
    }
}

/// Prefix a UTF-8 BOM so spreadsheet tools open the Arabic text correctly.
fn with_bom(csv: String) -> String {
    format!("\u{feff}{csv}")
}

/// Minimal RFC-4180 quoting: fields containing a comma, quote or newline
/// are wrapped and inner quotes doubled.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Log the frequency table as a closing summary, mirroring the CSV export.
pub fn log_type_stats(stats: &[TypeFrequency]) {
    info!("{}", "=".repeat(60));
    info!("question type statistics:");
    info!("{}", "=".repeat(60));
    for s in stats {
        info!(
            "{:<18} frequency: {:>4}  share: {:>6.2}%",
            s.question_type.to_string(),
            s.frequency,
            s.probability_percentage
        );
    }
    info!("{}", "=".repeat(60));
}
