//! Local rule-based classification.
//!
//! Scores question text against per-type keyword tables and either commits
//! to a classification or signals "inconclusive" explicitly - it never
//! guesses silently. Inconclusive results trigger the semantic cascade.

use crate::models::{Classification, QuestionType};
use crate::services::composite::CompositeDetector;

/// Keyword triggers for one base question type.
pub type KeywordTable = Vec<(QuestionType, Vec<String>)>;

/// Default trigger table: localized terms plus English equivalents,
/// one row per base type (`Mixed` is never scored directly).
pub fn default_keyword_table() -> KeywordTable {
    let row = |t: QuestionType, words: &[&str]| {
        (t, words.iter().map(|w| w.to_string()).collect())
    };

    vec![
        row(
            QuestionType::Calculation,
            &["احسب", "أحسب", "calculate", "عين", "أوجد قيمة"],
        ),
        row(
            QuestionType::Proof,
            &["أثبت", "برهن", "prove", "استنتج أن", "بين أن"],
        ),
        row(
            QuestionType::Interpretation,
            &["فسر", "علل", "interpret", "لماذا", "ما سبب"],
        ),
        row(
            QuestionType::Representation,
            &["ارسم", "مثل", "draw", "أنشئ منحنى", "plot"],
        ),
        row(
            QuestionType::EquationSolving,
            &["حل المعادلة", "solve", "أوجد الحلول"],
        ),
        row(
            QuestionType::Deduction,
            &["استنتج", "deduce", "ماذا تستنتج"],
        ),
    ]
}

/// Rule-based question classifier.
pub struct RuleBasedClassifier {
    keyword_table: KeywordTable,
    composite: CompositeDetector,
}

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self::with_keywords(default_keyword_table())
    }

    /// Build a classifier over an explicit keyword table (tests use this
    /// to stay independent of the default vocabulary).
    pub fn with_keywords(keyword_table: KeywordTable) -> Self {
        Self {
            keyword_table,
            composite: CompositeDetector::new(),
        }
    }

    /// Classify normalized question text, or return `None` when no keyword
    /// of any type occurs (the inconclusive signal).
    ///
    /// Each type scores the number of its triggers occurring as substrings
    /// of the lower-cased text. A unique maximum decides the type; a tie
    /// always collapses to `Mixed`, never to a priority order.
    /// Compositeness is computed independently of the type decision.
    pub fn classify(&self, text: &str) -> Option<Classification> {
        let text_lower = text.to_lowercase();

        let scores: Vec<(QuestionType, usize)> = self
            .keyword_table
            .iter()
            .map(|(q_type, keywords)| {
                let score = keywords
                    .iter()
                    .filter(|kw| text_lower.contains(kw.as_str()))
                    .count();
                (*q_type, score)
            })
            .collect();

        let max_score = scores.iter().map(|(_, s)| *s).max().unwrap_or(0);
        if max_score == 0 {
            return None;
        }

        let top: Vec<QuestionType> = scores
            .iter()
            .filter(|(_, s)| *s == max_score)
            .map(|(t, _)| *t)
            .collect();

        let question_type = if top.len() == 1 {
            top[0]
        } else {
            QuestionType::Mixed
        };

        Some(Classification {
            question_type,
            is_composite: self.composite.is_composite(text),
        })
    }
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self::new()
    }
}
