//! Question segmentation.
//!
//! Finds question boundaries in one document's raw text using an ordered
//! list of boundary patterns, falling back to paragraph splitting when no
//! pattern produces a usable segmentation.

use regex::Regex;

use crate::config::Config;
use crate::models::RawQuestionUnit;
use crate::services::normalizer::normalize;

/// Question segmenter.
///
/// The boundary patterns are tried in priority order and the first pattern
/// that yields at least two matches (and at least one unit surviving the
/// noise filter) wins outright; tiers are never merged.
pub struct QuestionSegmenter {
    boundary_patterns: Vec<Regex>,
    min_question_len: usize,
    min_paragraph_len: usize,
}

impl QuestionSegmenter {
    pub fn new(config: &Config) -> Self {
        Self::with_thresholds(config.min_question_len, config.min_paragraph_len)
    }

    /// Build a segmenter with explicit noise thresholds.
    ///
    /// `min_question_len` filters pattern-delimited spans; the paragraph
    /// fallback uses the larger `min_paragraph_len`.
    pub fn with_thresholds(min_question_len: usize, min_paragraph_len: usize) -> Self {
        // Priority order: Arabic exam markers, then a generic leading
        // numeral with punctuation, then the English equivalent.
        let boundary_patterns = [
            r"(?:السؤال|التمرين|س)\s*(\d+)",
            r"(?m)^(\d+)\s*[.)-]",
            r"(?:Question|Exercise)\s*(\d+)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("boundary pattern compiles"))
        .collect();

        Self {
            boundary_patterns,
            min_question_len,
            min_paragraph_len,
        }
    }

    /// Segment one document into ordered question units.
    ///
    /// A unit spans from a boundary match to the start of the next match
    /// (end of text for the last). Normalized spans at or below
    /// `min_question_len` chars are dropped as noise. A document with no
    /// usable segments yields an empty Vec, never an error.
    pub fn segment(&self, source_id: &str, text: &str) -> Vec<RawQuestionUnit> {
        for pattern in &self.boundary_patterns {
            // (match start, captured id) per boundary
            let boundaries: Vec<(usize, Option<String>)> = pattern
                .captures_iter(text)
                .filter_map(|cap| {
                    cap.get(0)
                        .map(|m| (m.start(), cap.get(1).map(|g| g.as_str().to_string())))
                })
                .collect();

            if boundaries.len() < 2 {
                continue;
            }

            let mut units = Vec::new();
            for (i, (start, captured_id)) in boundaries.iter().enumerate() {
                let end = boundaries
                    .get(i + 1)
                    .map(|(next_start, _)| *next_start)
                    .unwrap_or(text.len());

                let unit_text = normalize(&text[*start..end]);
                if unit_text.chars().count() > self.min_question_len {
                    units.push(RawQuestionUnit {
                        source_id: source_id.to_string(),
                        local_id: captured_id
                            .clone()
                            .unwrap_or_else(|| (i + 1).to_string()),
                        text: unit_text,
                    });
                }
            }

            // A tier whose spans were all noise does not win; try the next.
            if !units.is_empty() {
                return units;
            }
        }

        self.split_paragraphs(source_id, text)
    }

    /// Fallback: split on blank lines, keeping long paragraphs.
    ///
    /// Identifiers are positional over all paragraphs, so skipped short
    /// paragraphs still consume a number.
    fn split_paragraphs(&self, source_id: &str, text: &str) -> Vec<RawQuestionUnit> {
        text.split("\n\n")
            .enumerate()
            .filter_map(|(i, para)| {
                let para = normalize(para);
                if para.chars().count() > self.min_paragraph_len {
                    Some(RawQuestionUnit {
                        source_id: source_id.to_string(),
                        local_id: (i + 1).to_string(),
                        text: para,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter() -> QuestionSegmenter {
        QuestionSegmenter::with_thresholds(20, 50)
    }

    #[test]
    fn arabic_markers_win_first() {
        let text = "السؤال 1\nاحسب قيمة التكامل التالي بدقة متناهية\nالسؤال 2\nأثبت صحة المتراجحة لكل الأعداد الحقيقية\nالسؤال 3";
        let units = segmenter().segment("2023", text);

        // Third boundary only marks the end of the second span; its own
        // span is too short to survive.
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].local_id, "1");
        assert_eq!(units[1].local_id, "2");
        assert!(units[0].text.contains("احسب"));
        assert!(units[1].text.contains("أثبت"));
        assert!(units.iter().all(|u| u.source_id == "2023"));
    }

    #[test]
    fn generic_numeral_tier_applies_when_markers_absent() {
        let text = "1. Calculate the exact value of the integral below\n2) Prove the inequality holds for every real number";
        let units = segmenter().segment("2020", text);

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].local_id, "1");
        assert_eq!(units[1].local_id, "2");
    }

    #[test]
    fn english_markers_used_as_last_pattern_tier() {
        let text = "Question 1 Calculate the limit of the given sequence carefully\nQuestion 2 Deduce the general term of the sequence";
        let units = segmenter().segment("2019", text);

        assert_eq!(units.len(), 2);
        assert_eq!(units[0].local_id, "1");
        assert_eq!(units[1].local_id, "2");
    }

    #[test]
    fn single_match_does_not_trigger_a_tier() {
        // One Arabic marker only: the tier needs >= 2 matches, and no other
        // tier matches either, so the paragraph fallback applies.
        let text = "السؤال 1\nمقدمة قصيرة";
        assert!(segmenter().segment("2023", text).is_empty());
    }

    #[test]
    fn paragraph_fallback_keeps_positional_numbering() {
        let long_a = "هذه فقرة طويلة تتحدث عن موضوع الدوال العددية وخصائصها بالتفصيل الممل";
        let long_b = "فقرة أخرى طويلة تتناول المتتاليات العددية وسلوكها عند اللانهاية تماما";
        let text = format!("{long_a}\n\nقصيرة\n\n{long_b}");

        let units = segmenter().segment("2021", &text);
        assert_eq!(units.len(), 2);
        // The skipped short paragraph still consumed index 2.
        assert_eq!(units[0].local_id, "1");
        assert_eq!(units[1].local_id, "3");
    }

    #[test]
    fn unusable_text_yields_empty_sequence() {
        assert!(segmenter().segment("2022", "").is_empty());
        assert!(segmenter().segment("2022", "نص قصير").is_empty());
    }

    #[test]
    fn segmentation_is_deterministic() {
        let text = "التمرين 1\nعين قيم الوسيط التي تجعل المعادلة ذات حلين متمايزين\nالتمرين 2\nارسم المنحنى الممثل للدالة في معلم متعامد ومتجانس";
        let s = segmenter();
        assert_eq!(s.segment("2023", text), s.segment("2023", text));
    }
}
