//! End-to-end pipeline tests over a temporary source folder, with the
//! semantic classifier stubbed out.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::path::PathBuf;

use bac_analyzer::error::ClassifierError;
use bac_analyzer::orchestrator::App;
use bac_analyzer::{Config, PlainTextExtractor, SemanticClassifier};

/// Stub standing in for the remote classifier.
struct StubClassifier {
    reply: Value,
}

#[async_trait]
impl SemanticClassifier for StubClassifier {
    async fn classify(&self, _question_text: &str) -> Result<Value, ClassifierError> {
        Ok(self.reply.clone())
    }
}

fn test_config(tag: &str) -> (Config, PathBuf, PathBuf) {
    let base = std::env::temp_dir().join(format!("bac_pipeline_{tag}_{}", std::process::id()));
    let source = base.join("sources");
    let output = base.join("output");

    let config = Config {
        source_folder: source.to_string_lossy().to_string(),
        output_folder: output.to_string_lossy().to_string(),
        ..Config::default()
    };
    (config, source, output)
}

/// Two questions the rules decide, nothing for the stub to do.
const CONCLUSIVE_DOC: &str = "السؤال 1\nاحسب قيمة التكامل التالي بدقة متناهية\nالسؤال 2\nأثبت صحة المتراجحة لكل الأعداد الحقيقية\n";

/// Two question units with no classification keyword at all.
const INCONCLUSIVE_DOC: &str = "السؤال 1\nنص تمهيدي يصف وضعية انطلاق دون أي طلب صريح من المترشح\nالسؤال 2\nوضعية ثانية تعرض جدول قيم دون تعليمة واضحة في النص\n";

#[tokio::test]
async fn full_pipeline_writes_consistent_reports() {
    let (config, source, output) = test_config("full");
    tokio::fs::create_dir_all(&source).await.unwrap();
    tokio::fs::write(source.join("bac_2023.txt"), CONCLUSIVE_DOC)
        .await
        .unwrap();
    tokio::fs::write(source.join("bac_2019.txt"), INCONCLUSIVE_DOC)
        .await
        .unwrap();

    // The stub replies with an out-of-set type and a stringly boolean;
    // both must be coerced, never passed through.
    let app = App::with_components(
        config,
        PlainTextExtractor::new(),
        StubClassifier {
            reply: json!({"question_type": "essay", "is_composite": "True"}),
        },
    );

    let summary = app.run().await.unwrap();
    assert_eq!(summary.sources_processed, 2);
    assert_eq!(summary.sources_failed, 0);
    assert_eq!(summary.total_questions, 4);
    // Every question is either composite or of a top-3 type here.
    assert_eq!(summary.critical_questions, 4);

    // (a) per-question report: one row per classified question, types
    // always inside the closed set.
    let questions_csv =
        tokio::fs::read_to_string(output.join("questions_analysis.csv"))
            .await
            .unwrap();
    let questions_csv = questions_csv.trim_start_matches('\u{feff}');
    let rows: Vec<&str> = questions_csv.lines().skip(1).collect();
    assert_eq!(rows.len(), 4);

    let valid_types = [
        "calculation",
        "proof",
        "interpretation",
        "representation",
        "equation_solving",
        "deduction",
        "mixed",
    ];
    for row in &rows {
        let mut cols = row.rsplit(',');
        let is_composite = cols.next().unwrap();
        let question_type = cols.next().unwrap();
        assert!(valid_types.contains(&question_type), "row: {row}");
        assert!(is_composite == "true" || is_composite == "false");
    }

    // Sources are walked in sorted order: 2019 (stubbed to mixed, with
    // the "True" string coerced) before 2023 (rule-classified).
    assert!(rows[0].starts_with("2019,1,"));
    assert!(rows[0].ends_with("mixed,true"));
    assert!(rows[2].starts_with("2023,1,"));
    assert!(rows[2].ends_with("calculation,false"));
    assert!(rows[3].ends_with("proof,false"));

    // (b) frequency table, sorted descending.
    let stats_csv = tokio::fs::read_to_string(output.join("question_type_stats.csv"))
        .await
        .unwrap();
    let stats_csv = stats_csv.trim_start_matches('\u{feff}');
    let stats_rows: Vec<&str> = stats_csv.lines().collect();
    assert_eq!(stats_rows[0], "question_type,frequency,probability_percentage");
    assert_eq!(stats_rows[1], "mixed,2,50.00");

    // (c) ranked report: the two coerced-composite mixed questions score
    // 3 + 2 = 5 and lead.
    let critical = tokio::fs::read_to_string(output.join("critical_questions.txt"))
        .await
        .unwrap();
    assert!(critical.contains("#1 | year: 2019"));
    assert!(critical.contains("importance: 5"));
    assert!(critical.contains("Total critical questions: 4"));

    tokio::fs::remove_dir_all(source.parent().unwrap()).await.ok();
}

#[tokio::test]
async fn missing_source_folder_fails_fast() {
    let (config, _source, _output) = test_config("missing");
    // Source folder deliberately never created.
    let app = App::with_components(
        config,
        PlainTextExtractor::new(),
        StubClassifier { reply: json!({}) },
    );

    assert!(app.run().await.is_err());
}

#[tokio::test]
async fn empty_source_folder_fails_fast() {
    let (config, source, _output) = test_config("empty");
    tokio::fs::create_dir_all(&source).await.unwrap();

    let app = App::with_components(
        config,
        PlainTextExtractor::new(),
        StubClassifier { reply: json!({}) },
    );

    assert!(app.run().await.is_err());
    tokio::fs::remove_dir_all(source.parent().unwrap()).await.ok();
}

#[tokio::test]
async fn unreadable_source_is_skipped_not_fatal() {
    let (config, source, output) = test_config("skip");
    tokio::fs::create_dir_all(&source).await.unwrap();
    tokio::fs::write(source.join("bac_2023.txt"), CONCLUSIVE_DOC)
        .await
        .unwrap();
    // A directory with a .txt name: listed as a source, unreadable as text.
    tokio::fs::create_dir_all(source.join("broken.txt"))
        .await
        .unwrap();

    let app = App::with_components(
        config,
        PlainTextExtractor::new(),
        StubClassifier { reply: json!({}) },
    );

    let summary = app.run().await.unwrap();
    assert_eq!(summary.sources_processed, 1);
    assert_eq!(summary.sources_failed, 1);
    assert_eq!(summary.total_questions, 2);
    assert!(output.join("questions_analysis.csv").exists());

    tokio::fs::remove_dir_all(source.parent().unwrap()).await.ok();
}
