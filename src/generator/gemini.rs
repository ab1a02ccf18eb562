//! Google Gemini backend.
//!
//! Uses the `generateContent` REST endpoint with a JSON response MIME type
//! and `responseSchema`, so the service itself enforces the reply shape.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use super::{CompletionBackend, CompletionRequest, GeneratorError};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone)]
pub struct GeminiBackend {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, GeneratorError> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.base_url, model)
    }
}

pub(crate) fn request_body(request: &CompletionRequest) -> serde_json::Value {
    json!({
        "contents": [
            { "role": "user", "parts": [ { "text": request.prompt } ] }
        ],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": request.schema,
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Joins the text parts of the first candidate.
fn response_text(response: GenerateContentResponse) -> Option<String> {
    let content = response.candidates.into_iter().next()?.content?;
    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    fn name(&self) -> &'static str {
        "Gemini"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, GeneratorError> {
        let response = self
            .http_client
            .post(self.generate_url(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::Status { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = response_text(parsed).ok_or(GeneratorError::EmptyResponse)?;
        log::debug!("Completion: {:?}", text);
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_prompt_and_schema() {
        let request = CompletionRequest {
            model: "gemini-3-flash-preview".into(),
            prompt: "hello".into(),
            schema: json!({ "type": "OBJECT" }),
        };
        let body = request_body(&request);
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(body["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[test]
    fn url_targets_model() {
        let backend = GeminiBackend::new("key", Duration::from_secs(1)).unwrap();
        assert_eq!(
            backend.generate_url("m1"),
            "https://generativelanguage.googleapis.com/v1beta/models/m1:generateContent"
        );
    }

    #[test]
    fn text_is_joined_from_parts() {
        let raw = r#"{"candidates":[{"content":{"parts":[{"text":"[{\"a\":"},{"text":"1}]"}]}}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response_text(parsed).as_deref(), Some("[{\"a\":1}]"));
    }

    #[test]
    fn missing_candidates_is_no_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response_text(parsed), None);
    }
}
