//! `POST /api/ai/generate` — code from a natural-language description.

use std::time::Instant;

use axum::{extract::State, Json};

use crate::api::dto::{CompletionResponse, GenerateRequest};
use crate::api::AppState;
use crate::error::Result;
use crate::extract::extract_fenced_block;
use crate::prompts::generation_prompt;
use crate::providers::ProviderKind;

use super::{format_elapsed, required_field};

#[utoipa::path(
    post,
    path = "/api/ai/generate",
    tag = "ai",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated code as a fenced block", body = CompletionResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Provider rejected, unavailable, or failed"),
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<CompletionResponse>> {
    let description = required_field(req.prompt.as_deref(), "prompt")?;
    let provider = ProviderKind::from_tag(&req.model_provider)?;

    let prompt = generation_prompt(description, &req.language, &req.complexity);

    let start = Instant::now();
    let completion = state.providers.dispatch(provider, &prompt, None).await?;

    Ok(Json(CompletionResponse {
        model: completion.model_name,
        model_provider: req.model_provider,
        result: extract_fenced_block(&completion.text),
        time_taken: format_elapsed(start),
    }))
}
