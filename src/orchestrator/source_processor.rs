//! Single-document processing.

use tracing::{info, warn};

use crate::clients::SemanticClassifier;
use crate::models::ClassifiedQuestion;
use crate::services::QuestionSegmenter;
use crate::utils::logging::truncate_text;
use crate::workflow::ClassificationCascade;

/// Segment one document and classify every resulting unit, in order.
///
/// Questions are classified sequentially in source order, so the returned
/// sequence (and everything ranked from it) is deterministic. A document
/// that segments into nothing is logged and yields an empty Vec.
pub async fn process_source<S: SemanticClassifier>(
    segmenter: &QuestionSegmenter,
    cascade: &ClassificationCascade<S>,
    source_id: &str,
    text: &str,
    display_limit: usize,
    verbose_logging: bool,
) -> Vec<ClassifiedQuestion> {
    let units = segmenter.segment(source_id, text);

    if units.is_empty() {
        warn!("source {}: no usable questions found", source_id);
        return Vec::new();
    }

    info!("source {}: {} questions found", source_id, units.len());

    let mut classified = Vec::with_capacity(units.len());
    for unit in units {
        if verbose_logging {
            info!(
                "source {} question {}: {}",
                source_id,
                unit.local_id,
                truncate_text(&unit.text, 80)
            );
        }

        let classification = cascade.classify(&unit).await;
        classified.push(ClassifiedQuestion::new(
            unit,
            classification,
            display_limit,
        ));
    }

    classified
}
