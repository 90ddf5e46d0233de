//! Analysis pipeline: local classification, then generative augmentation and merge, with a mock fallback.
//!
//! Each stage returns an explicit `AnalysisFailure` instead of swallowing errors.
//! `fallback` is the single place where a failure becomes the localized mock
//! response, so the pipeline as a whole is total: a validated request always
//! produces a schema-correct `CanonicalResponse`.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::analysis::classifier::{detect_skill_gaps, GapSet};
use crate::analysis::merge::apply_local_gaps;
use crate::analysis::mock::mock_response_for;
use crate::analysis::normalizer::{normalize_model_output, NormalizeError};
use crate::analysis::prompts::{build_analysis_prompt, ANALYSIS_SYSTEM};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::CanonicalResponse;
use crate::taxonomy::{SkillTaxonomy, DEFAULT_ROLE};

/// Substituted when the classifier finds nothing missing.
pub const ADVANCED_TOPICS: [&str; 2] = ["System Design", "Cloud Architecture"];

/// A request that already carries resume text.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub resume_text: String,
    pub role: String,
    /// Raw language label from the caller, forwarded verbatim to the model.
    pub language: String,
}

/// Why the generative augmentation did not produce the response.
#[derive(Debug, Error)]
pub enum AnalysisFailure {
    #[error("generative service is not configured")]
    CredentialsAbsent,

    #[error("generative call failed: {0}")]
    Generation(#[from] LlmError),

    #[error("model output rejected: {0}")]
    SchemaParse(#[from] NormalizeError),

    #[error("unclassified failure: {0}")]
    Unclassified(String),
}

impl AnalysisFailure {
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisFailure::CredentialsAbsent => "credentials_absent",
            AnalysisFailure::Generation(_) => "generation_failure",
            AnalysisFailure::SchemaParse(_) => "schema_parse_failure",
            AnalysisFailure::Unclassified(_) => "unclassified_failure",
        }
    }
}

/// Runs the classifier for `role` (default role if unknown). Never empty.
pub fn local_gaps(taxonomy: &SkillTaxonomy, resume_text: &str, role: &str) -> GapSet {
    if taxonomy.find(role).is_none() {
        warn!("Unknown role '{role}', falling back to '{DEFAULT_ROLE}'");
    }
    let model = taxonomy.resolve(role);

    let gaps = detect_skill_gaps(resume_text, model);
    if gaps.is_empty() {
        debug!("No local gaps found, substituting advanced topics");
        return ADVANCED_TOPICS.iter().collect();
    }
    gaps
}

/// Local analysis → credential check → generate → normalize → merge.
async fn augment(
    taxonomy: &SkillTaxonomy,
    generator: Option<&dyn TextGenerator>,
    request: &AnalysisRequest,
) -> Result<CanonicalResponse, AnalysisFailure> {
    let gaps = local_gaps(taxonomy, &request.resume_text, &request.role);
    info!(
        "Local classifier identified {} gaps: {:?}",
        gaps.len(),
        gaps.iter().collect::<Vec<_>>()
    );

    let generator = generator.ok_or(AnalysisFailure::CredentialsAbsent)?;

    let prompt = build_analysis_prompt(&request.resume_text, &request.role, &request.language, &gaps);
    info!(
        "Analyzing with {} (language: {}, role: {})",
        generator.model(),
        request.language,
        request.role
    );

    let raw = generator.generate(&prompt, ANALYSIS_SYSTEM).await?;
    debug!("Raw model response: {raw}");

    let response = normalize_model_output(&raw)?;
    Ok(apply_local_gaps(response, &gaps))
}

/// Maps any failure to the mock response for the best-known language.
pub fn fallback(failure: &AnalysisFailure, language: &str) -> CanonicalResponse {
    match failure {
        AnalysisFailure::CredentialsAbsent => {
            info!("Generative service not configured, serving mock response ({language})")
        }
        other => warn!(
            kind = other.kind(),
            "Analysis fell back to mock response ({language}): {other}"
        ),
    }
    mock_response_for(language)
}

/// Runs the whole pipeline. Total: every failure, including a panic inside a
/// stage, ends in `fallback`.
pub async fn run_analysis(
    taxonomy: Arc<SkillTaxonomy>,
    generator: Option<Arc<dyn TextGenerator>>,
    request: AnalysisRequest,
) -> CanonicalResponse {
    let language = request.language.clone();

    let task = tokio::spawn(async move {
        augment(&taxonomy, generator.as_deref(), &request).await
    });

    let outcome = match task.await {
        Ok(outcome) => outcome,
        Err(e) => Err(AnalysisFailure::Unclassified(e.to_string())),
    };

    outcome.unwrap_or_else(|failure| fallback(&failure, &language))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::analysis::mock::mock_response;
    use crate::models::Language;

    pub(crate) enum Behavior {
        Reply(String),
        ApiError(u16),
        Panic,
    }

    /// Scripted generator that records every prompt it receives.
    pub(crate) struct StubGenerator {
        behavior: Behavior,
        calls: AtomicUsize,
        last_prompt: Mutex<Option<String>>,
    }

    impl StubGenerator {
        pub(crate) fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
                last_prompt: Mutex::new(None),
            })
        }

        pub(crate) fn replying(text: impl Into<String>) -> Arc<Self> {
            Self::new(Behavior::Reply(text.into()))
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_prompt(&self) -> Option<String> {
            self.last_prompt.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            match &self.behavior {
                Behavior::Reply(text) => Ok(text.clone()),
                Behavior::ApiError(status) => Err(LlmError::Api {
                    status: *status,
                    message: "service unavailable".to_string(),
                }),
                Behavior::Panic => panic!("stub generator exploded"),
            }
        }

        fn model(&self) -> &str {
            "stub-model"
        }
    }

    fn request(resume: &str, language: &str) -> AnalysisRequest {
        AnalysisRequest {
            resume_text: resume.to_string(),
            role: DEFAULT_ROLE.to_string(),
            language: language.to_string(),
        }
    }

    async fn run(stub: Option<Arc<StubGenerator>>, request: AnalysisRequest) -> CanonicalResponse {
        let generator = stub.map(|s| s as Arc<dyn TextGenerator>);
        run_analysis(Arc::new(SkillTaxonomy::builtin()), generator, request).await
    }

    fn legacy_reply() -> String {
        json!({
            "summary_message": "You are close to job-ready.",
            "missing_skills": ["Docker"],
            "study_plan": [{
                "day": "Day 1-2",
                "topic": "Node.js",
                "youtube_query": "Node.js crash course English",
                "reason": "Backend skills are required for full stack roles."
            }]
        })
        .to_string()
    }

    #[test]
    fn test_local_gaps_substitutes_advanced_topics() {
        let taxonomy = SkillTaxonomy::builtin();
        let gaps = local_gaps(&taxonomy, "React, Node.js, SQL, Git", DEFAULT_ROLE);
        assert_eq!(gaps.to_vec(), vec!["Cloud Architecture", "System Design"]);
    }

    #[test]
    fn test_local_gaps_unknown_role_uses_default() {
        let taxonomy = SkillTaxonomy::builtin();
        let gaps = local_gaps(&taxonomy, "HTML", "Astronaut");
        assert!(gaps.contains("Node.js"));
        assert!(gaps.contains("Basic Backend Knowledge"));
    }

    #[tokio::test]
    async fn test_no_credentials_returns_mock() {
        let response = run(None, request("Skilled in HTML, CSS only", "Gujarati")).await;
        assert_eq!(response, mock_response(Language::Gujarati));
    }

    #[tokio::test]
    async fn test_generation_failure_returns_mock() {
        let stub = StubGenerator::new(Behavior::ApiError(503));
        let response = run(Some(stub.clone()), request("HTML", "Hindi")).await;
        assert_eq!(response, mock_response(Language::Hindi));
        assert_eq!(stub.calls(), 1, "no retry expected");
    }

    #[tokio::test]
    async fn test_not_json_returns_mock_for_every_language() {
        for language in ["Hindi", "Gujarati", "English", "Marathi"] {
            let stub = StubGenerator::replying("not json");
            let response = run(Some(stub), request("HTML, CSS", language)).await;
            assert_eq!(response, mock_response_for(language));
            assert!(!response.missing_skills.is_empty());
        }
    }

    #[tokio::test]
    async fn test_unknown_schema_returns_mock() {
        let stub = StubGenerator::replying(r#"{"verdict": "hire", "plan": []}"#);
        let response = run(Some(stub), request("HTML", "Hindi")).await;
        assert_eq!(response, mock_response(Language::Hindi));
    }

    #[tokio::test]
    async fn test_panic_in_stage_returns_mock() {
        let stub = StubGenerator::new(Behavior::Panic);
        let response = run(Some(stub), request("HTML", "Gujarati")).await;
        assert_eq!(response, mock_response(Language::Gujarati));
    }

    #[tokio::test]
    async fn test_legacy_reply_is_normalized_and_merged() {
        let stub = StubGenerator::replying(legacy_reply());
        let response = run(Some(stub.clone()), request("Skilled in HTML, CSS only", "English")).await;

        assert_eq!(response.candidate_summary, "You are close to job-ready.");
        assert_eq!(
            response.study_plan[0].description,
            "Backend skills are required for full stack roles."
        );
        for label in ["Docker", "Node.js", "SQL", "Git", "React", "Basic Backend Knowledge"] {
            assert_eq!(
                response.missing_skills.iter().filter(|s| *s == label).count(),
                1,
                "{label} should appear exactly once in {:?}",
                response.missing_skills
            );
        }
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn test_reply_without_skills_uses_local_gaps() {
        let reply = json!({
            "summary": "ok",
            "study_plan": []
        })
        .to_string();
        let stub = StubGenerator::replying(format!("```json\n{reply}\n```"));
        let taxonomy = SkillTaxonomy::builtin();
        let expected = local_gaps(&taxonomy, "HTML", DEFAULT_ROLE).to_vec();

        let response = run(Some(stub), request("HTML", "Hindi")).await;
        assert_eq!(response.missing_skills, expected);
    }

    #[tokio::test]
    async fn test_prompt_carries_local_findings() {
        let stub = StubGenerator::replying(legacy_reply());
        run(Some(stub.clone()), request("React, Node.js, SQL, Git", "Gujarati")).await;

        let prompt = stub.last_prompt().expect("generator was called");
        assert!(prompt.contains(r#"["Cloud Architecture","System Design"]"#));
        assert!(prompt.contains("Response Language: Gujarati"));
        assert!(prompt.contains("React, Node.js, SQL, Git"));
    }

    #[test]
    fn test_failure_kinds_are_distinct() {
        let kinds = [
            AnalysisFailure::CredentialsAbsent.kind(),
            AnalysisFailure::Generation(LlmError::EmptyContent).kind(),
            AnalysisFailure::SchemaParse(NormalizeError::NotAnObject).kind(),
            AnalysisFailure::Unclassified("x".to_string()).kind(),
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }
}
