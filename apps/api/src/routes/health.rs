use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /
/// Plain-text liveness banner.
pub async fn root_handler() -> &'static str {
    "Skill-gap analysis backend is running! Use the /analyze endpoint."
}

/// GET /health
/// Returns a simple status object with service version and generative backend status.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillgap-api",
        "generative_backend": {
            "configured": state.generator.is_some(),
            "model": state.config.model_name(),
        },
    }))
}
