use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The one response shape every consumer of `/analyze` depends on, whichever
/// upstream vocabulary produced it and whether the model was called at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalResponse {
    pub candidate_summary: String,
    #[serde(default)]
    pub missing_skills: Vec<String>,
    pub study_plan: Vec<StudyPlanItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_level: Option<String>,
    /// Unrecognised keys returned by the model, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One step of the study plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlanItem {
    /// "Day 1-2", "3 Days", ... free-form label.
    pub day: String,
    pub topic: String,
    pub youtube_query: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StudyPlanItem {
    pub fn new(day: &str, topic: &str, youtube_query: String, description: &str) -> Self {
        Self {
            day: day.to_string(),
            topic: topic.to_string(),
            youtube_query,
            description: description.to_string(),
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_optional_fields_are_omitted_when_absent() {
        let response = CanonicalResponse {
            candidate_summary: "Keep going".to_string(),
            missing_skills: vec!["Git".to_string()],
            study_plan: vec![],
            student_name: None,
            current_level: None,
            extra: Map::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("student_name"));
        assert!(!object.contains_key("current_level"));
        assert_eq!(object.len(), 3);
    }

    #[test]
    fn test_unknown_keys_land_in_extra() {
        let value = json!({
            "candidate_summary": "s",
            "study_plan": [{
                "day": "Day 1",
                "topic": "Git",
                "youtube_query": "git tutorial",
                "description": "d",
                "difficulty": "easy"
            }],
            "confidence": 0.9
        });
        let response: CanonicalResponse = serde_json::from_value(value).unwrap();
        assert!(response.missing_skills.is_empty());
        assert_eq!(response.extra.get("confidence"), Some(&json!(0.9)));
        assert_eq!(response.study_plan[0].extra.get("difficulty"), Some(&json!("easy")));
    }
}
