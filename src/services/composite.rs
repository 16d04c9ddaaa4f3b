//! Composite (multi-part) question detection.

use regex::Regex;

/// Composite-question detector.
///
/// Scores the text against a fixed set of multi-part indicator patterns.
/// One incidental hit (a single numbered clause, the question's own
/// top-level "1." header) is not enough; two or more independent
/// indicators imply genuine sub-part structure.
pub struct CompositeDetector {
    indicator_patterns: Vec<Regex>,
}

impl CompositeDetector {
    pub fn new() -> Self {
        // Lettered/numbered sub-item markers, explicit "part one/two"
        // phrasing, and ordinal connectors. The letter/digit classes are a
        // single char wide on purpose: a "السؤال 2" or "Question 2" header
        // leaves the digit unpunctuated and contributes no hit.
        let indicator_patterns = [
            r"[أاa1]\s*[.)-]",
            r"[بb2]\s*[.)-]",
            r"الجزء\s+(?:الأول|الثاني)",
            r"(?:أولا|ثانيا|ثالثا)",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("indicator pattern compiles"))
        .collect();

        Self { indicator_patterns }
    }

    /// Total number of indicator hits across all patterns.
    pub fn indicator_count(&self, text: &str) -> usize {
        self.indicator_patterns
            .iter()
            .map(|p| p.find_iter(text).count())
            .sum()
    }

    /// True iff the text shows at least two independent sub-part indicators.
    pub fn is_composite(&self, text: &str) -> bool {
        self.indicator_count(text) >= 2
    }
}

impl Default for CompositeDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_indicator_is_not_composite() {
        let d = CompositeDetector::new();
        assert!(!d.is_composite("أ. احسب قيمة العبارة"));
        assert_eq!(d.indicator_count("أ. احسب قيمة العبارة"), 1);
    }

    #[test]
    fn two_lettered_items_are_composite() {
        let d = CompositeDetector::new();
        assert!(d.is_composite("أ. احسب النهاية ب. استنتج اتجاه التغير"));
        assert!(d.is_composite("a) compute the limit b) deduce the variation"));
    }

    #[test]
    fn part_phrasing_counts() {
        let d = CompositeDetector::new();
        assert!(d.is_composite("الجزء الأول يتعلق بالدالة، الجزء الثاني بالمتتالية"));
    }

    #[test]
    fn ordinal_connectors_count() {
        let d = CompositeDetector::new();
        assert!(d.is_composite("أولا عين مجموعة التعريف ثانيا ادرس الاتجاه"));
    }

    #[test]
    fn top_level_question_header_does_not_count() {
        let d = CompositeDetector::new();
        // The digit is not followed by sub-item punctuation.
        assert_eq!(d.indicator_count("السؤال 2 احسب قيمة التكامل"), 0);
        assert_eq!(d.indicator_count("Question 2 compute the integral"), 0);
    }

    #[test]
    fn plain_text_is_not_composite() {
        let d = CompositeDetector::new();
        assert!(!d.is_composite("احسب قيمة التكامل بين الصفر والواحد"));
    }
}
