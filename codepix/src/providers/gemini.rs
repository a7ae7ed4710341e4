use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ProviderConfig;
use crate::error::{CodePixError, Result};
use crate::providers::Completion;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub(crate) const CREDENTIAL_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the Google Generative Language REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CodePixError::Internal(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    pub async fn complete(&self, prompt: &str, model_override: Option<&str>) -> Result<Completion> {
        let model = model_override.unwrap_or(&self.model);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| CodePixError::Internal(format!("Invalid API key header: {e}")))?,
        );

        let response = self
            .client
            .post(&url)
            .headers(headers)
            .json(&request)
            .send()
            .await
            .map_err(|e| CodePixError::Upstream(format!("Gemini request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CodePixError::Upstream(format!(
                "Gemini API error ({status}): {body}"
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CodePixError::Upstream(format!("Failed to parse Gemini response: {e}")))?;

        let candidate = body
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| {
                CodePixError::Upstream("Gemini response contained no candidates".to_string())
            })?;

        // A candidate may split its text across several parts.
        let text = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");

        Ok(Completion {
            text,
            model_name: model.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ProviderConfig {
        ProviderConfig {
            api_key: "test-key".to_string(),
            model: "gemini-2.5-flash".to_string(),
            base_url: None,
            timeout_secs: 30,
        }
    }

    #[test]
    fn new_uses_public_endpoint_by_default() {
        let client = GeminiClient::new(&test_config()).expect("client should build");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn new_honors_base_url_override() {
        let mut config = test_config();
        config.base_url = Some("http://localhost:9999".to_string());

        let client = GeminiClient::new(&config).expect("client should build");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn response_parsing_joins_parts() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "foo"}, {"text": "bar"}]}}
            ]
        }"#;

        let parsed: GenerateContentResponse = serde_json::from_str(raw).expect("parse");
        let text = parsed.candidates[0]
            .content
            .parts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<String>();
        assert_eq!(text, "foobar");
    }

    #[test]
    fn response_parsing_tolerates_missing_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert!(parsed.candidates.is_empty());
    }
}
