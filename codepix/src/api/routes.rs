use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let ai = Router::new()
        .route("/generate", post(handlers::generate))
        .route("/explain", post(handlers::explain))
        .route("/translate", post(handlers::translate))
        .route("/optimize", post(handlers::optimize));

    Router::new()
        .nest("/api/ai", ai)
        .route("/api/status", get(handlers::status).post(handlers::status))
        .route("/api/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
