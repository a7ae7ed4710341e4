//! HTTP façade over the AI endpoints.
//!
//! Normalizes transport concerns for callers: one timeout policy for all
//! four operations, error envelopes surfaced as messages, timeouts and
//! connection failures mapped to distinct variants, and the `result`
//! field unwrapped from the success envelope.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::api::dto::StatusResponse;
use crate::error::{CodePixError, Result};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

/// Lenient view of a service response; every field optional so a
/// degenerate body still parses.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl AiClient {
    /// `base_url` is the service root, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the deadline applied to every request made by this client.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Generate code from a natural-language description. Returns the
    /// generated code (normally a fenced block).
    pub async fn generate_code(
        &self,
        prompt: &str,
        language: &str,
        complexity: &str,
        provider: &str,
    ) -> Result<String> {
        let prompt = non_empty(prompt, "Prompt")?;

        self.post_operation(
            "/api/ai/generate",
            json!({
                "prompt": prompt.trim(),
                "language": language,
                "complexity": complexity,
                "modelProvider": provider,
            }),
        )
        .await
    }

    /// Explain a snippet. Returns the explanation text.
    pub async fn explain_code(&self, code: &str, provider: &str) -> Result<String> {
        let code = non_empty(code, "Code")?;

        self.post_operation(
            "/api/ai/explain",
            json!({
                "prompt": code.trim(),
                "modelProvider": provider,
            }),
        )
        .await
    }

    /// Optimize a snippet. Returns optimized code mixed with the
    /// provider's rationale; apply [`crate::extract::extract_code`] to get
    /// just the code.
    pub async fn optimize_code(&self, code: &str, language: &str, provider: &str) -> Result<String> {
        let code = non_empty(code, "Code")?;

        self.post_operation(
            "/api/ai/optimize",
            json!({
                "code": code.trim(),
                "language": language,
                "modelProvider": provider,
            }),
        )
        .await
    }

    /// Translate a snippet between languages. Returns the translated code.
    pub async fn translate_code(
        &self,
        code: &str,
        source_language: &str,
        target_language: &str,
        provider: &str,
    ) -> Result<String> {
        let code = non_empty(code, "Code")?;

        self.post_operation(
            "/api/ai/translate",
            json!({
                "code": code.trim(),
                "sourceLanguage": source_language,
                "targetLanguage": target_language,
                "modelProvider": provider,
            }),
        )
        .await
    }

    /// Fetch the service status report.
    pub async fn check_status(&self) -> Result<StatusResponse> {
        let response = self
            .http
            .get(format!("{}/api/status", self.base_url))
            .timeout(self.timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CodePixError::Service(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|_| CodePixError::InvalidResponse)
    }

    /// True when the service answers its status endpoint.
    pub async fn test_connection(&self) -> bool {
        match self.check_status().await {
            Ok(_) => true,
            Err(error) => {
                tracing::debug!("Status check failed: {error}");
                false
            }
        }
    }

    async fn post_operation(&self, endpoint: &str, body: serde_json::Value) -> Result<String> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ResponseEnvelope>()
                .await
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or_else(|| format!("HTTP {status}"));
            return Err(CodePixError::Service(message));
        }

        let envelope: ResponseEnvelope = response
            .json()
            .await
            .map_err(|_| CodePixError::InvalidResponse)?;

        Ok(envelope.result.unwrap_or_default())
    }
}

fn non_empty<'a>(value: &'a str, label: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(CodePixError::Validation(format!(
            "{label} is required and must be a non-empty string"
        )));
    }
    Ok(value)
}

fn map_transport_error(error: reqwest::Error) -> CodePixError {
    if error.is_timeout() {
        return CodePixError::Timeout;
    }
    CodePixError::Network(error.to_string())
}
