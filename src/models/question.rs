//! Core data types of the analysis pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cognitive type of an exam question.
///
/// Closed set: any value arriving from outside (e.g. the semantic classifier)
/// that is not one of these wire names is coerced to `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Numeric computation ("احسب", "calculate")
    Calculation,
    /// Proof or demonstration ("أثبت", "برهن")
    Proof,
    /// Explanation or analysis ("فسر", "علل")
    Interpretation,
    /// Drawing or plotting ("ارسم", "مثل")
    Representation,
    /// Solving an equation ("حل المعادلة")
    EquationSolving,
    /// Logical deduction ("استنتج")
    Deduction,
    /// Several types at once, or undecidable
    Mixed,
}

impl QuestionType {
    /// The six base types the rule classifier scores (excludes `Mixed`).
    pub const BASE: [QuestionType; 6] = [
        QuestionType::Calculation,
        QuestionType::Proof,
        QuestionType::Interpretation,
        QuestionType::Representation,
        QuestionType::EquationSolving,
        QuestionType::Deduction,
    ];

    /// Wire name used in exports and in the semantic classifier contract.
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Calculation => "calculation",
            QuestionType::Proof => "proof",
            QuestionType::Interpretation => "interpretation",
            QuestionType::Representation => "representation",
            QuestionType::EquationSolving => "equation_solving",
            QuestionType::Deduction => "deduction",
            QuestionType::Mixed => "mixed",
        }
    }

    /// Parse a wire name, coercing anything outside the closed set to `Mixed`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "calculation" => QuestionType::Calculation,
            "proof" => QuestionType::Proof,
            "interpretation" => QuestionType::Interpretation,
            "representation" => QuestionType::Representation,
            "equation_solving" => QuestionType::EquationSolving,
            "deduction" => QuestionType::Deduction,
            "mixed" => QuestionType::Mixed,
            _ => QuestionType::Mixed,
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One segmented question, before classification.
///
/// Created once by the segmenter and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestionUnit {
    /// Identifier of the originating document (usually a year like "2023").
    pub source_id: String,
    /// Pattern-captured or positional id, unique within its source only.
    pub local_id: String,
    /// Normalized question text.
    pub text: String,
}

/// Result of classifying one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub question_type: QuestionType,
    pub is_composite: bool,
}

impl Classification {
    /// The universal safe fallback when the semantic classifier fails.
    pub fn fallback() -> Self {
        Self {
            question_type: QuestionType::Mixed,
            is_composite: false,
        }
    }
}

/// A question unit together with its classification and bounded display text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedQuestion {
    pub source_id: String,
    pub local_id: String,
    /// Question text truncated for storage/export.
    pub question_text: String,
    pub question_type: QuestionType,
    pub is_composite: bool,
}

impl ClassifiedQuestion {
    /// Combine a unit and its classification, truncating the display text
    /// to `display_limit` characters (chars, not bytes — text is Arabic).
    pub fn new(
        unit: RawQuestionUnit,
        classification: Classification,
        display_limit: usize,
    ) -> Self {
        let question_text = if unit.text.chars().count() > display_limit {
            unit.text.chars().take(display_limit).collect()
        } else {
            unit.text
        };

        Self {
            source_id: unit.source_id,
            local_id: unit.local_id,
            question_text,
            question_type: classification.question_type,
            is_composite: classification.is_composite,
        }
    }
}

/// Frequency of one question type across the whole batch.
#[derive(Debug, Clone, Serialize)]
pub struct TypeFrequency {
    pub question_type: QuestionType,
    pub frequency: usize,
    /// Share of the batch, rounded to 2 decimals.
    pub probability_percentage: f64,
}

/// A question surfaced as important for revision, with its justification.
#[derive(Debug, Clone, Serialize)]
pub struct CriticalQuestionEntry {
    pub source_id: String,
    pub local_id: String,
    pub question_text: String,
    pub question_type: QuestionType,
    pub importance_score: u32,
    /// Human-readable reasons, in the order the scoring rules fired.
    pub reasons: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for t in QuestionType::BASE {
            assert_eq!(QuestionType::from_wire(t.as_str()), t);
        }
        assert_eq!(QuestionType::from_wire("mixed"), QuestionType::Mixed);
    }

    #[test]
    fn unknown_wire_name_coerces_to_mixed() {
        assert_eq!(QuestionType::from_wire("essay"), QuestionType::Mixed);
        assert_eq!(QuestionType::from_wire(""), QuestionType::Mixed);
    }

    #[test]
    fn display_text_is_truncated_by_chars() {
        let unit = RawQuestionUnit {
            source_id: "2023".to_string(),
            local_id: "1".to_string(),
            text: "س".repeat(600),
        };
        let q = ClassifiedQuestion::new(unit, Classification::fallback(), 500);
        assert_eq!(q.question_text.chars().count(), 500);
    }
}
