// Skill-gap analysis: local classification, prompt construction, generative
// augmentation, response normalization, merge and localized fallback.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod classifier;
pub mod handlers;
pub mod merge;
pub mod mock;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
