//! Criticality ranking over the finished batch.
//!
//! Runs after every question is classified: the importance score depends
//! on the global type-frequency ranking, so this is strictly a second pass.

use crate::models::{ClassifiedQuestion, CriticalQuestionEntry, QuestionType, TypeFrequency};

/// Score added when a question's type is among the most frequent.
const FREQUENT_TYPE_SCORE: u32 = 3;
/// Score added for a composite question.
const COMPOSITE_SCORE: u32 = 2;

/// Criticality ranker.
pub struct CriticalityRanker {
    /// How many of the most frequent types count as "frequent".
    top_type_count: usize,
}

impl CriticalityRanker {
    pub fn new() -> Self {
        Self { top_type_count: 3 }
    }

    /// Frequency of each question type across the batch, sorted descending.
    ///
    /// The tally preserves first-encountered order, and the sort is stable,
    /// so equal frequencies keep that order - this is also the tie-break
    /// for the "top types" selection.
    pub fn type_frequencies(&self, questions: &[ClassifiedQuestion]) -> Vec<TypeFrequency> {
        let mut tally: Vec<(QuestionType, usize)> = Vec::new();
        for q in questions {
            match tally.iter_mut().find(|(t, _)| *t == q.question_type) {
                Some((_, count)) => *count += 1,
                None => tally.push((q.question_type, 1)),
            }
        }

        tally.sort_by(|a, b| b.1.cmp(&a.1));

        let total = questions.len();
        tally
            .into_iter()
            .map(|(question_type, frequency)| TypeFrequency {
                question_type,
                frequency,
                probability_percentage: round2(frequency as f64 / total as f64 * 100.0),
            })
            .collect()
    }

    /// Compute the ranked critical-question entries.
    ///
    /// A question scores +3 when its type is among the top frequent types
    /// (with its rank 1..=3 recorded as a reason) and +2 when composite.
    /// Only questions with a positive score are kept, sorted descending by
    /// score; the sort is stable so equal scores keep batch order.
    pub fn rank(&self, questions: &[ClassifiedQuestion]) -> Vec<CriticalQuestionEntry> {
        let top_types: Vec<QuestionType> = self
            .type_frequencies(questions)
            .into_iter()
            .take(self.top_type_count)
            .map(|f| f.question_type)
            .collect();

        let mut entries: Vec<CriticalQuestionEntry> = questions
            .iter()
            .filter_map(|q| {
                let mut importance_score = 0;
                let mut reasons = Vec::new();

                if let Some(pos) = top_types.iter().position(|t| *t == q.question_type) {
                    importance_score += FREQUENT_TYPE_SCORE;
                    reasons.push(format!("frequent type (rank {})", pos + 1));
                }

                if q.is_composite {
                    importance_score += COMPOSITE_SCORE;
                    reasons.push("composite question".to_string());
                }

                if importance_score == 0 {
                    return None;
                }

                Some(CriticalQuestionEntry {
                    source_id: q.source_id.clone(),
                    local_id: q.local_id.clone(),
                    question_text: q.question_text.clone(),
                    question_type: q.question_type,
                    importance_score,
                    reasons,
                })
            })
            .collect();

        entries.sort_by(|a, b| b.importance_score.cmp(&a.importance_score));
        entries
    }
}

impl Default for CriticalityRanker {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
