//! Merge step: reconciles model-reported gaps with the local classifier's findings.

use crate::analysis::classifier::GapSet;
use crate::models::CanonicalResponse;

/// Set-union of model-reported skills and locally detected gaps, rendered sorted.
///
/// Commutative and idempotent; blank and duplicate labels collapse. When the
/// model reported nothing usable the result is exactly the local set.
pub fn merge_missing_skills(ai_skills: &[String], local_gaps: &GapSet) -> Vec<String> {
    let ai: GapSet = ai_skills.iter().collect();
    ai.union(local_gaps).to_vec()
}

/// Applies the merge to a normalized response in place.
pub fn apply_local_gaps(mut response: CanonicalResponse, local_gaps: &GapSet) -> CanonicalResponse {
    response.missing_skills = merge_missing_skills(&response.missing_skills, local_gaps);
    response
}
