//! Wire shapes for form submission.
//!
//! Questions use the same shape for the request body and for the records the
//! forms service sends back, so these types also decode read-side questions.

use super::draft::QuestionType;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_VALUE: i64 = 1;
pub const DEFAULT_MAX_VALUE: i64 = 5;
pub const DEFAULT_MIN_LABEL: &str = "Min";
pub const DEFAULT_MAX_LABEL: &str = "Max";

/// Request body for creating a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionPayload {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionPayload>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}
