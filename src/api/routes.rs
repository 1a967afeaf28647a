use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use super::middleware::{llm_cors, same_origin_guard};
use super::state::AppState;

pub fn create_router(state: AppState) -> Router {
    // CORS sits outside the guard so preflights are answered before it runs.
    let llm = Router::new()
        .route("/api/llm", post(handlers::llm))
        .route_layer(middleware::from_fn(same_origin_guard))
        .layer(llm_cors());

    Router::new()
        .route("/healthz", get(handlers::health_check))
        .route("/api/generate", post(handlers::generate))
        .route("/api/models", get(handlers::list_models))
        .merge(llm)
        .with_state(state)
}
