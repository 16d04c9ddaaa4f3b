//! # Bac Analyzer
//!
//! Extracts exam questions from multi-year document text, classifies each
//! by cognitive type, flags composite questions and surfaces the most
//! important ones for revision.
//!
//! ## Architecture
//!
//! Strictly layered, bottom-up:
//!
//! ### 1. Infrastructure
//! - `infrastructure/` - document text extraction (`DocumentTextExtractor`)
//!
//! ### 2. Capabilities (Services)
//! - `services/` - one ability each, no flow knowledge
//! - `normalizer` / `segmenter` / `composite` / `rule_classifier` -
//!   the segmentation and local-classification core
//! - `ranker` - criticality scoring over the finished batch
//! - `report_writer` - the three export files
//!
//! ### 3. Flow (Workflow)
//! - `workflow/ClassificationCascade` - local rules first, semantic
//!   classifier on inconclusive, `{mixed, false}` as the absolute fallback
//!
//! ### 4. Orchestration
//! - `orchestrator/batch_processor` - whole-run driver and statistics
//! - `orchestrator/source_processor` - one document end to end
//!
//! The remote classifier (`clients/GeminiClient`) sits behind the
//! `SemanticClassifier` trait so the pipeline runs and tests without it.

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// Re-export the commonly used types.
pub use clients::{GeminiClient, SemanticClassifier};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentTextExtractor, PlainTextExtractor};
pub use models::{Classification, ClassifiedQuestion, QuestionType, RawQuestionUnit};
pub use orchestrator::{App, RunSummary};
pub use workflow::ClassificationCascade;
