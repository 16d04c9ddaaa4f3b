//! Capability layer.
//!
//! Each service covers exactly one ability and never drives the flow:
//! - `normalizer` - canonical single-line text
//! - `segmenter` - question boundary detection
//! - `composite` - multi-part detection
//! - `rule_classifier` - local keyword classification
//! - `ranker` - criticality scoring over the finished batch
//! - `report_writer` - the three export files

pub mod composite;
pub mod normalizer;
pub mod ranker;
pub mod report_writer;
pub mod rule_classifier;
pub mod segmenter;

pub use composite::CompositeDetector;
pub use normalizer::normalize;
pub use ranker::CriticalityRanker;
pub use report_writer::ReportWriter;
pub use rule_classifier::RuleBasedClassifier;
pub use segmenter::QuestionSegmenter;
