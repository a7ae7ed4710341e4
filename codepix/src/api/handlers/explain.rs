//! `POST /api/ai/explain` — plain-language explanation of a snippet.

use std::time::Instant;

use axum::{extract::State, Json};

use crate::api::dto::{CompletionResponse, ExplainRequest};
use crate::api::AppState;
use crate::error::Result;
use crate::prompts::explanation_prompt;
use crate::providers::ProviderKind;

use super::{format_elapsed, required_field};

#[utoipa::path(
    post,
    path = "/api/ai/explain",
    tag = "ai",
    request_body = ExplainRequest,
    responses(
        (status = 200, description = "Explanation text, verbatim from the provider", body = CompletionResponse),
        (status = 400, description = "Missing or empty required field"),
        (status = 500, description = "Provider rejected, unavailable, or failed"),
    )
)]
pub async fn explain(
    State(state): State<AppState>,
    Json(req): Json<ExplainRequest>,
) -> Result<Json<CompletionResponse>> {
    let code = required_field(req.prompt.as_deref(), "prompt")?;
    let provider = ProviderKind::from_tag(&req.model_provider)?;

    let prompt = explanation_prompt(code);

    let start = Instant::now();
    let completion = state.providers.dispatch(provider, &prompt, None).await?;

    Ok(Json(CompletionResponse {
        model: completion.model_name,
        model_provider: req.model_provider,
        result: completion.text,
        time_taken: format_elapsed(start),
    }))
}
