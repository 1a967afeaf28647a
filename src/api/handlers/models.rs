use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;
use crate::core_types::ProviderModelId;
use crate::prompts::INTEGRATED_MODELS;

#[derive(Debug, Serialize)]
pub struct ModelEntry {
    pub id: String,
    pub provider: String,
    pub model: String,
    pub configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub models: Vec<ModelEntry>,
    pub configured_providers: Vec<String>,
    pub fast_model: String,
    pub planner_model: String,
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let configured: Vec<String> = state
        .registry
        .configured()
        .into_iter()
        .map(str::to_string)
        .collect();

    let models = INTEGRATED_MODELS
        .iter()
        .filter_map(|raw| ProviderModelId::parse(raw).ok())
        .map(|id| ModelEntry {
            id: id.to_string(),
            configured: configured.iter().any(|p| p == id.provider()),
            provider: id.provider().to_string(),
            model: id.model().to_string(),
        })
        .collect();

    Json(ModelsResponse {
        models,
        configured_providers: configured,
        fast_model: state.server.fast_model.clone(),
        planner_model: state.server.planner_model.clone(),
    })
}
