pub mod gemini_client;

pub use gemini_client::{extract_json_object, GeminiClient, SemanticClassifier};
