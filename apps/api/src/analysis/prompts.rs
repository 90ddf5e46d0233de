// LLM prompt constants for skill-gap analysis.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::analysis::classifier::GapSet;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System instruction for the analysis call.
pub const ANALYSIS_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Analysis prompt template.
/// Placeholders: {target_role}, {language}, {local_gaps_json}, {resume_text}.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"### ROLE
You are an expert Technical Career Counselor and Curriculum Developer for Indian engineering students.

### TASK
Analyze this resume against the requirements for a **{target_role}** position in the Indian job market.

### INPUT DATA
Target Role: {target_role}
Response Language: {language}
Resume Text: {resume_text}

### ANALYSIS LOGIC
1. Compare the candidate's skills against standard requirements for a {target_role}
2. Our internal skill classifier has flagged these high-priority gaps: {local_gaps_json}
3. Treat the flagged gaps as established facts. Do NOT contradict or drop them.
4. Identify additional critical skill gaps beyond what our classifier detected
5. For each gap, create optimized YouTube search terms (use keywords like "crash course", "full tutorial", "complete guide")

### OUTPUT FORMAT
Return ONLY valid JSON (no markdown, no code blocks, no text before or after the object):

{
  "student_name": "Name from resume or 'Candidate'",
  "current_level": "Beginner/Intermediate/Advanced",
  "summary": "2-3 sentence encouraging analysis in {language} about their readiness for {target_role}",
  "skill_gaps": ["Skill 1", "Skill 2", "Skill 3"],
  "study_plan": [
    {
      "topic": "Skill Name",
      "duration": "X Days",
      "youtube_search_term": "optimized search query for best tutorials in {language}",
      "reason": "Why this skill is critical for {target_role} (in {language})"
    }
  ]
}

### CONSTRAINTS
- `summary` and `reason` MUST be written in {language}
- `topic`, `duration` and `skill_gaps` entries may stay in English
- `youtube_search_term` must include the skill name + "tutorial" or "crash course"
- Generate 5-7 study plan items covering 2 weeks
- Prioritize the gaps identified by our classifier: {local_gaps_json}"#;

/// Builds the analysis prompt. Pure text assembly: identical inputs give identical output.
pub fn build_analysis_prompt(
    resume_text: &str,
    target_role: &str,
    language: &str,
    local_gaps: &GapSet,
) -> String {
    let gaps_json = serde_json::to_string(&local_gaps.to_vec()).unwrap_or_else(|_| "[]".into());

    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("target_role", target_role),
            ("language", language),
            ("local_gaps_json", &gaps_json),
            ("resume_text", resume_text),
        ],
    )
}

/// Single left-to-right pass over `template`. Substituted values are copied
/// verbatim and never scanned again, so caller text containing `{name}` stays
/// literal. Braces that do not open a known placeholder are kept as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let placeholder = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));

        match placeholder {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
