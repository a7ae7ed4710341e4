use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CodePix AI API",
        version = "1.0.0",
        description = "AI assistant endpoints for the CodePix snippet editor: generate, explain, translate, and optimize code.",
    ),
    paths(
        handlers::status::status,
        handlers::generate::generate,
        handlers::explain::explain,
        handlers::translate::translate,
        handlers::optimize::optimize,
    ),
    components(schemas(
        dto::GenerateRequest,
        dto::ExplainRequest,
        dto::TranslateRequest,
        dto::OptimizeRequest,
        dto::CompletionResponse,
        dto::TranslateResponse,
        dto::OptimizeResponse,
        dto::StatusResponse,
        dto::ServiceFlags,
    )),
    tags(
        (name = "status", description = "Service health"),
        (name = "ai", description = "AI code operations"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/api/docs", ApiDoc::openapi()).into()
}
