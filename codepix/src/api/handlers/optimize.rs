//! `POST /api/ai/optimize` — optimized code plus a prose rationale.
//!
//! The extractor is deliberately not applied here: the rationale the
//! prompt asks for lives outside the code block, and stripping it would
//! discard half the answer.

use std::time::Instant;

use axum::{extract::State, Json};

use crate::api::dto::{OptimizeRequest, OptimizeResponse};
use crate::api::AppState;
use crate::error::Result;
use crate::prompts::optimization_prompt;
use crate::providers::ProviderKind;

use super::{format_elapsed, required_field};

#[utoipa::path(
    post,
    path = "/api/ai/optimize",
    tag = "ai",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Optimized code and rationale, verbatim from the provider", body = OptimizeResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Provider rejected, unavailable, or failed"),
    )
)]
pub async fn optimize(
    State(state): State<AppState>,
    Json(req): Json<OptimizeRequest>,
) -> Result<Json<OptimizeResponse>> {
    let code = required_field(req.code.as_deref(), "code")?;
    let provider = ProviderKind::from_tag(&req.model_provider)?;

    let prompt = optimization_prompt(code, &req.language);

    let start = Instant::now();
    let completion = state.providers.dispatch(provider, &prompt, None).await?;

    Ok(Json(OptimizeResponse {
        model: completion.model_name,
        model_provider: req.model_provider,
        language: req.language,
        result: completion.text,
        time_taken: format_elapsed(start),
    }))
}
