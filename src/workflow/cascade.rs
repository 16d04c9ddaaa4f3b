//! Classification cascade - the flow layer.
//!
//! Order for one question:
//! 1. local rules (keyword scoring)
//! 2. semantic classifier (only when the rules are inconclusive)
//! 3. `{mixed, false}` fallback (when the remote call fails in any way)
//!
//! The cascade always produces exactly one classification and never
//! propagates an error to the caller.

use serde_json::Value;
use tracing::{debug, warn};

use crate::clients::SemanticClassifier;
use crate::models::{Classification, QuestionType, RawQuestionUnit};
use crate::services::RuleBasedClassifier;

/// Classification cascade.
///
/// Holds the local strategy and the remote capability; the remote side is
/// a trait so tests can drop in a stub.
pub struct ClassificationCascade<S: SemanticClassifier> {
    rules: RuleBasedClassifier,
    remote: S,
}

impl<S: SemanticClassifier> ClassificationCascade<S> {
    pub fn new(rules: RuleBasedClassifier, remote: S) -> Self {
        Self { rules, remote }
    }

    /// Classify one question unit; infallible by construction.
    pub async fn classify(&self, unit: &RawQuestionUnit) -> Classification {
        // First definite local result wins; the remote call only happens
        // for inconclusive questions (cost: O(inconclusive), not O(total)).
        if let Some(classification) = self.rules.classify(&unit.text) {
            return classification;
        }

        debug!(
            "source {} question {}: local rules inconclusive, deferring to semantic classifier",
            unit.source_id, unit.local_id
        );

        match self.remote.classify(&unit.text).await {
            Ok(value) => coerce_remote(&value),
            Err(e) => {
                warn!(
                    "source {} question {}: semantic classifier failed ({}), using fallback",
                    unit.source_id, unit.local_id, e
                );
                Classification::fallback()
            }
        }
    }
}

/// Validate and coerce a remote response object.
///
/// An absent or unknown `question_type` becomes `Mixed`; a non-boolean
/// `is_composite` is compared case-insensitively against the literal
/// "true".
fn coerce_remote(value: &Value) -> Classification {
    let question_type = value
        .get("question_type")
        .and_then(Value::as_str)
        .map(QuestionType::from_wire)
        .unwrap_or(QuestionType::Mixed);

    let is_composite = match value.get("is_composite") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        Some(other) => other.to_string().eq_ignore_ascii_case("true"),
        None => false,
    };

    Classification {
        question_type,
        is_composite,
    }
}
