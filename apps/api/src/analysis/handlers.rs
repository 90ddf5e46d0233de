//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde_json::{json, Value};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::mock::mock_response_for;
use crate::analysis::pipeline::{fallback, run_analysis, AnalysisFailure, AnalysisRequest};
use crate::document::extract_text;
use crate::errors::AppError;
use crate::models::language::DEFAULT_REQUEST_LANGUAGE;
use crate::models::CanonicalResponse;
use crate::state::AppState;
use crate::taxonomy::DEFAULT_ROLE;

// ────────────────────────────────────────────────────────────────────────────
// Request form
// ────────────────────────────────────────────────────────────────────────────

/// Fields of the `/analyze` multipart form. Blank values count as absent.
#[derive(Debug, Default)]
pub struct AnalyzeForm {
    pub file: Option<Bytes>,
    pub text: Option<String>,
    pub language: Option<String>,
    pub role: Option<String>,
}

impl AnalyzeForm {
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_REQUEST_LANGUAGE)
    }

    pub fn role(&self) -> &str {
        self.role.as_deref().unwrap_or(DEFAULT_ROLE)
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reads fields into `form` as they arrive, so whatever was parsed before an
/// error is still available to the caller.
async fn read_form(multipart: &mut Multipart, form: &mut AnalyzeForm) -> Result<(), MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    form.file = Some(bytes);
                }
            }
            "text" => form.text = non_blank(field.text().await?),
            "language" => form.language = non_blank(field.text().await?),
            "role" => form.role = non_blank(field.text().await?),
            _ => {}
        }
    }
    Ok(())
}

/// The uploaded document wins over literal text. `None` means no resume was supplied.
async fn resolve_resume_text(form: &mut AnalyzeForm) -> Result<Option<String>, AppError> {
    if let Some(bytes) = form.file.take() {
        return extract_text(bytes).await.map(Some);
    }
    Ok(form.text.take())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart form: `file` (PDF) or `text`, plus optional `language` and `role`.
/// Returns the canonical analysis. Only a missing or unreadable resume is an
/// error; every other failure yields the localized mock response.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CanonicalResponse>, AppError> {
    let request_id = Uuid::new_v4();
    analyze_form(state, multipart)
        .instrument(info_span!("analyze", %request_id))
        .await
}

async fn analyze_form(
    state: AppState,
    mut multipart: Multipart,
) -> Result<Json<CanonicalResponse>, AppError> {
    let mut form = AnalyzeForm::default();

    if let Err(e) = read_form(&mut multipart, &mut form).await {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return Err(AppError::Extraction(format!(
                "Uploaded document exceeds the {} byte limit",
                state.config.max_upload_bytes
            )));
        }
        let failure = AnalysisFailure::Unclassified(format!("malformed form data: {e}"));
        return Ok(Json(fallback(&failure, form.language())));
    }

    let language = form.language().to_string();
    let role = form.role().to_string();

    let resume_text = match resolve_resume_text(&mut form).await? {
        Some(text) => text,
        None if state.config.use_mock_data => {
            info!("No resume supplied, mock mode forced");
            return Ok(Json(mock_response_for(&language)));
        }
        None => {
            return Err(AppError::Validation("No file or text provided".to_string()));
        }
    };

    info!("Analysis requested (role: {role}, language: {language})");

    let response = run_analysis(
        state.taxonomy.clone(),
        state.generator.clone(),
        AnalysisRequest {
            resume_text,
            role,
            language,
        },
    )
    .await;

    Ok(Json(response))
}

/// GET /api/v1/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "roles": state.taxonomy.role_names(),
        "default_role": DEFAULT_ROLE,
    }))
}
