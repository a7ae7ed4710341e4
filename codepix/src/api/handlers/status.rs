//! `GET|POST /api/status` — service health and credential presence.

use axum::{extract::State, Json};

use crate::api::dto::{ServiceFlags, StatusResponse};
use crate::api::AppState;

fn credential_flag(configured: bool) -> String {
    if configured { "configured" } else { "not configured" }.to_string()
}

fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}h {minutes}m {seconds}s")
}

#[utoipa::path(
    get,
    path = "/api/status",
    tag = "status",
    responses(
        (status = 200, description = "Service health, credential flags, and uptime", body = StatusResponse),
    )
)]
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let uptime_seconds = state.started_at.elapsed().as_secs();

    Json(StatusResponse {
        status: "OK".to_string(),
        message: "CodePix AI service is running".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        uptime: format_uptime(uptime_seconds),
        uptime_seconds,
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceFlags {
            gemini: credential_flag(state.config.gemini.is_some()),
            groq: credential_flag(state.config.groq.is_some()),
        },
        endpoints: vec![
            "GET /api/status".to_string(),
            "POST /api/ai/generate".to_string(),
            "POST /api/ai/explain".to_string(),
            "POST /api/ai/translate".to_string(),
            "POST /api/ai/optimize".to_string(),
        ],
    })
}
