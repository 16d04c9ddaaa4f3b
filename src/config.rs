/// Program configuration.
///
/// Every field can be overridden from the environment; `GEMINI_API_KEY`
/// has no default and is required.
use crate::error::{AppError, AppResult, ConfigError};

#[derive(Clone, Debug)]
pub struct Config {
    /// Folder holding the extracted exam text files
    pub source_folder: String,
    /// Folder the three reports are written into
    pub output_folder: String,
    /// Normalized spans at or below this length are discarded as noise
    pub min_question_len: usize,
    /// Larger threshold used by the paragraph fallback
    pub min_paragraph_len: usize,
    /// Question text is truncated to this many chars for storage/export
    pub display_text_limit: usize,
    /// How many critical questions the ranked report keeps
    pub top_critical_limit: usize,
    /// Whether debug-level detail is logged
    pub verbose_logging: bool,
    // --- Gemini configuration ---
    pub gemini_api_key: String,
    pub gemini_api_base_url: String,
    pub gemini_model_name: String,
    /// Bound on each semantic-classifier call; no retries past it
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_folder: "exam_texts".to_string(),
            output_folder: "output".to_string(),
            min_question_len: 20,
            min_paragraph_len: 50,
            display_text_limit: 500,
            top_critical_limit: 20,
            verbose_logging: false,
            gemini_api_key: String::new(),
            gemini_api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model_name: "gemini-pro".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();

        // The classifier credential is the one setting with no fallback.
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AppError::env_var_not_found("GEMINI_API_KEY"))?;

        Ok(Self {
            source_folder: std::env::var("SOURCE_FOLDER").unwrap_or(default.source_folder),
            output_folder: std::env::var("OUTPUT_FOLDER").unwrap_or(default.output_folder),
            min_question_len: parse_env("MIN_QUESTION_LEN", default.min_question_len)?,
            min_paragraph_len: parse_env("MIN_PARAGRAPH_LEN", default.min_paragraph_len)?,
            display_text_limit: parse_env("DISPLAY_TEXT_LIMIT", default.display_text_limit)?,
            top_critical_limit: parse_env("TOP_CRITICAL_LIMIT", default.top_critical_limit)?,
            verbose_logging: parse_env("VERBOSE_LOGGING", default.verbose_logging)?,
            gemini_api_key,
            gemini_api_base_url: std::env::var("GEMINI_API_BASE_URL")
                .unwrap_or(default.gemini_api_base_url),
            gemini_model_name: std::env::var("GEMINI_MODEL_NAME")
                .unwrap_or(default.gemini_model_name),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", default.request_timeout_secs)?,
        })
    }
}

/// Parse an optional env var, failing loudly on a present-but-invalid value
/// instead of silently keeping the default.
fn parse_env<T: std::str::FromStr>(var_name: &str, default: T) -> AppResult<T> {
    match std::env::var(var_name) {
        Ok(value) => value.parse().map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: std::any::type_name::<T>().to_string(),
            }
            .into()
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_env_var_keeps_the_default() {
        assert_eq!(parse_env("BAC_ANALYZER_UNSET_VAR", 42usize).unwrap(), 42);
    }

    #[test]
    fn missing_api_key_is_a_fatal_config_error() {
        // No test in this crate sets GEMINI_API_KEY.
        if std::env::var("GEMINI_API_KEY").is_err() {
            assert!(Config::from_env().is_err());
        }
    }
}
