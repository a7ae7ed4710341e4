//! Request and response shapes for the AI endpoints.
//!
//! Wire names are fixed: request fields and most response fields are
//! camelCase (`modelProvider`, `sourceLanguage`), except `time_taken`,
//! which older clients already parse in snake_case.

use serde::{Deserialize, Serialize};

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_language() -> String {
    "javascript".to_string()
}

fn default_complexity() -> String {
    "intermediate".to_string()
}

fn default_target_language() -> String {
    "python".to_string()
}

/// `POST /api/ai/generate` request body.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Natural-language description of the code to generate. Required.
    pub prompt: Option<String>,
    #[serde(default = "default_provider")]
    pub model_provider: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_complexity")]
    pub complexity: String,
}

/// `POST /api/ai/explain` request body.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    /// The code to explain. Required.
    pub prompt: Option<String>,
    #[serde(default = "default_provider")]
    pub model_provider: String,
}

/// `POST /api/ai/translate` request body.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// The code to translate. Required.
    pub code: Option<String>,
    #[serde(default = "default_language")]
    pub source_language: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
    #[serde(default = "default_provider")]
    pub model_provider: String,
}

/// `POST /api/ai/optimize` request body.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// The code to optimize. Required.
    pub code: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_provider")]
    pub model_provider: String,
}

/// Envelope for generate and explain responses.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub model: String,
    pub model_provider: String,
    pub result: String,
    #[serde(rename = "time_taken")]
    pub time_taken: String,
}

/// Envelope for translate responses; echoes the language pair.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub model: String,
    pub model_provider: String,
    pub source_language: String,
    pub target_language: String,
    pub result: String,
    #[serde(rename = "time_taken")]
    pub time_taken: String,
}

/// Envelope for optimize responses; echoes the language.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub model: String,
    pub model_provider: String,
    pub language: String,
    pub result: String,
    #[serde(rename = "time_taken")]
    pub time_taken: String,
}

/// `GET /api/status` response body.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
    pub timestamp: String,
    pub uptime: String,
    #[serde(rename = "uptimeSeconds")]
    pub uptime_seconds: u64,
    pub version: String,
    pub services: ServiceFlags,
    pub endpoints: Vec<String>,
}

/// Which provider credentials were present at startup.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceFlags {
    pub gemini: String,
    pub groq: String,
}
