//! Gemini semantic classifier client.
//!
//! Used only when the local rules come back inconclusive. One outbound
//! call per inconclusive question, a bounded timeout, and no retries:
//! any failure is reported upward and absorbed by the cascade.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::error::ClassifierError;

/// Remote classification capability.
///
/// Contract: a JSON object `{"question_type": <string>,
/// "is_composite": <boolean-ish>}`. The caller validates and coerces the
/// fields; implementations only have to deliver the parsed object.
#[async_trait]
pub trait SemanticClassifier: Send + Sync {
    async fn classify(&self, question_text: &str) -> Result<Value, ClassifierError>;
}

/// Gemini API client.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.gemini_api_base_url.trim_end_matches('/'),
                config.gemini_model_name
            ),
            api_key: config.gemini_api_key.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

#[async_trait]
impl SemanticClassifier for GeminiClient {
    async fn classify(&self, question_text: &str) -> Result<Value, ClassifierError> {
        debug!("semantic classification request ({} chars)", question_text.len());

        let payload = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(question_text) }]
            }],
            "generationConfig": {
                "temperature": 0.1,
                "maxOutputTokens": 100
            }
        });

        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClassifierError::RequestFailed {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(ClassifierError::BadStatus {
                status: response.status().as_u16(),
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ClassifierError::RequestFailed {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let text = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or(ClassifierError::EmptyCandidate)?;

        extract_json_object(text)
    }
}

/// Classification prompt, matching the closed type set exactly.
fn build_prompt(question_text: &str) -> String {
    format!(
        r#"أنت محلل أسئلة امتحانات. صنّف السؤال التالي إلى أحد الأنواع التالية فقط:
- calculation (حساب رقمي)
- proof (إثبات أو برهان)
- interpretation (تفسير أو تحليل)
- representation (رسم أو تمثيل)
- equation_solving (حل معادلة)
- deduction (استنتاج منطقي)
- mixed (مزيج من الأنواع)

حدد أيضاً إذا كان السؤال مركب (يحتوي على عدة أجزاء).

السؤال:
{question_text}

أرجع JSON فقط بهذا الشكل (بدون أي نص إضافي):
{{"question_type": "...", "is_composite": true/false}}"#
    )
}

/// Pull the first balanced `{...}` object out of a free-text model reply.
///
/// The reply may be wrapped in markdown code fences or surrounded by prose;
/// fences are stripped first, then the text is scanned from the first `{`
/// for its balanced closing brace (string-aware, so braces inside JSON
/// strings do not count), and only that span is parsed.
pub fn extract_json_object(text: &str) -> Result<Value, ClassifierError> {
    let text = strip_code_fences(text);

    let start = text.find('{').ok_or(ClassifierError::NoJsonObject)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let span = &text[start..start + offset + c.len_utf8()];
                    return serde_json::from_str(span).map_err(ClassifierError::from);
                }
            }
            _ => {}
        }
    }

    Err(ClassifierError::NoJsonObject)
}

fn strip_code_fences(text: &str) -> &str {
    if let Some(inner) = text.split("```json").nth(1) {
        inner.split("```").next().unwrap_or(inner)
    } else if let Some(inner) = text.split("```").nth(1) {
        inner
    } else {
        text
    }
}
