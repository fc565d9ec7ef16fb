/// Shared data structures for the application state
///
/// These structs mirror the JSON payloads returned by the AI service
/// and flow unchanged from the API layer into the UI layer.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A parsed response from one of the analysis endpoints
///
/// Both result shapes share the same outer envelope: an ordered list of
/// questions and an optional backend-reported error message.
pub trait AnalysisResult: DeserializeOwned + Clone + Debug + Send + 'static {
    /// Path of the endpoint producing this result, relative to the server URL
    const ENDPOINT: &'static str;

    /// Error reported by the backend inside an otherwise successful response
    fn other_error(&self) -> Option<&str>;

    /// Number of questions, each rendered as its own pair of panels
    fn question_count(&self) -> usize;
}

// ========== Solution ==========

/// How much a knowledge point matters for the problem
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Importance {
    High,
    Medium,
    Low,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionStep {
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionKnowledge {
    pub category: String,
    pub content: String,
    pub importance: Importance,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionQuestion {
    #[serde(default)]
    pub steps: Vec<SolutionStep>,
    #[serde(default)]
    pub knowledge: Vec<SolutionKnowledge>,
}

/// Response of `POST /ai/solution`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SolutionResult {
    #[serde(default)]
    pub questions: Vec<SolutionQuestion>,
    #[serde(default)]
    pub other_error: Option<String>,
}

impl AnalysisResult for SolutionResult {
    const ENDPOINT: &'static str = "/ai/solution";

    fn other_error(&self) -> Option<&str> {
        self.other_error.as_deref()
    }

    fn question_count(&self) -> usize {
        self.questions.len()
    }
}

// ========== Check ==========

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckStep {
    pub content: String,
    /// True when the student made a mistake in this step
    pub is_error: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckKnowledge {
    pub category: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckQuestion {
    #[serde(default)]
    pub steps: Vec<CheckStep>,
    #[serde(default)]
    pub knowledge: Vec<CheckKnowledge>,
}

/// Response of `POST /ai/check`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckResult {
    #[serde(default)]
    pub questions: Vec<CheckQuestion>,
    #[serde(default)]
    pub other_error: Option<String>,
}

impl AnalysisResult for CheckResult {
    const ENDPOINT: &'static str = "/ai/check";

    fn other_error(&self) -> Option<&str> {
        self.other_error.as_deref()
    }

    fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_solution() {
        let payload = json!({
            "questions": [{
                "steps": [{ "content": "x + 1 = 2" }, { "content": "x = 1" }],
                "knowledge": [
                    { "category": "代数", "content": "移项", "importance": "HIGH" },
                    { "category": "代数", "content": "合并同类项", "importance": "LOW" }
                ]
            }],
            "other_error": null
        });

        let result: SolutionResult = serde_json::from_value(payload).unwrap();
        assert_eq!(result.question_count(), 1);
        assert_eq!(result.questions[0].steps[1].content, "x = 1");
        assert_eq!(result.questions[0].knowledge[0].importance, Importance::High);
        assert_eq!(result.questions[0].knowledge[1].importance, Importance::Low);
        assert_eq!(result.other_error(), None);
    }

    #[test]
    fn test_parse_check_with_domain_error() {
        let payload = json!({
            "questions": [{
                "steps": [
                    { "content": "2 + 2 = 5", "is_error": true },
                    { "content": "5 - 1 = 4", "is_error": false }
                ],
                "knowledge": [{ "category": "算术", "content": "加法" }]
            }],
            "other_error": "图片模糊"
        });

        let result: CheckResult = serde_json::from_value(payload).unwrap();
        assert!(result.questions[0].steps[0].is_error);
        assert!(!result.questions[0].steps[1].is_error);
        assert_eq!(result.other_error(), Some("图片模糊"));
    }

    #[test]
    fn test_missing_envelope_fields_default() {
        let result: SolutionResult = serde_json::from_str("{}").unwrap();
        assert!(result.questions.is_empty());
        assert!(result.other_error.is_none());
    }

    #[test]
    fn test_unknown_importance_is_rejected() {
        let payload = json!({
            "questions": [{
                "steps": [],
                "knowledge": [{ "category": "c", "content": "k", "importance": "CRITICAL" }]
            }]
        });
        assert!(serde_json::from_value::<SolutionResult>(payload).is_err());
    }

    #[test]
    fn test_check_step_requires_error_flag() {
        let payload = json!({ "questions": [{ "steps": [{ "content": "x" }] }] });
        assert!(serde_json::from_value::<CheckResult>(payload).is_err());
    }
}
