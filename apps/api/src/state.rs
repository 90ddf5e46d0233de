use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::taxonomy::SkillTaxonomy;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub taxonomy: Arc<SkillTaxonomy>,
    /// `None` when no API key is configured; the pipeline then serves the mock response.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(
        config: Config,
        taxonomy: SkillTaxonomy,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self {
            config,
            taxonomy: Arc::new(taxonomy),
            generator,
        }
    }
}
