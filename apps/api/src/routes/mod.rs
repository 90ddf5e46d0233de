pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/analyze", post(handlers::handle_analyze).layer(upload_limit))
        .route("/api/v1/analyze", post(handlers::handle_analyze).layer(upload_limit))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::taxonomy::SkillTaxonomy;

    fn app() -> Router {
        build_router(AppState::new(Config::for_tests(), SkillTaxonomy::builtin(), None))
    }

    #[tokio::test]
    async fn test_root_banner() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("/analyze"));
    }

    #[tokio::test]
    async fn test_health_reports_unconfigured_backend() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["generative_backend"]["configured"], false);
        assert_eq!(value["generative_backend"]["model"], "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_analyze_rejects_get() {
        let response = app()
            .oneshot(Request::builder().uri("/analyze").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
