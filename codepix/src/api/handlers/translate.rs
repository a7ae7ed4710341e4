//! `POST /api/ai/translate` — port a snippet between languages.

use std::time::Instant;

use axum::{extract::State, Json};

use crate::api::dto::{TranslateRequest, TranslateResponse};
use crate::api::AppState;
use crate::error::Result;
use crate::extract::extract_fenced_block;
use crate::prompts::translation_prompt;
use crate::providers::ProviderKind;

use super::{format_elapsed, required_field};

#[utoipa::path(
    post,
    path = "/api/ai/translate",
    tag = "ai",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated code as a fenced block", body = TranslateResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Provider rejected, unavailable, or failed"),
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>> {
    let code = required_field(req.code.as_deref(), "code")?;
    let provider = ProviderKind::from_tag(&req.model_provider)?;

    let prompt = translation_prompt(code, &req.source_language, &req.target_language);

    let start = Instant::now();
    let completion = state.providers.dispatch(provider, &prompt, None).await?;

    Ok(Json(TranslateResponse {
        model: completion.model_name,
        model_provider: req.model_provider,
        source_language: req.source_language,
        target_language: req.target_language,
        result: extract_fenced_block(&completion.text),
        time_taken: format_elapsed(start),
    }))
}
