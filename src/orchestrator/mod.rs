//! Orchestration layer.
//!
//! `batch_processor` drives the whole run (scan sources, per-source loop,
//! ranking, exports, final stats); `source_processor` turns one document
//! into classified questions. Neither contains decision logic of its own:
//! segmentation, classification and ranking live in the layers below.
//!
//! ```text
//! batch_processor (all sources)
//!     ↓
//! source_processor (one document)
//!     ↓
//! workflow::ClassificationCascade (one question)
//!     ↓
//! services (segmenter / rules / composite / ranker / reports)
//!     ↓
//! infrastructure (text extraction) + clients (semantic classifier)
//! ```

pub mod batch_processor;
pub mod source_processor;

pub use batch_processor::{App, RunSummary};
pub use source_processor::process_source;
