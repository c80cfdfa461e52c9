//! Read-side records returned by the forms service

use crate::state::QuestionPayload;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Server-assigned form id. The service uses integers but nothing here
/// depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormId::Number(n) => write!(f, "{n}"),
            FormId::Text(s) => f.write_str(s),
        }
    }
}

/// Body of a successful create call
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedForm {
    pub id: FormId,
}

/// One entry of the forms listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormSummary {
    pub id: FormId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl FormSummary {
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A form with its questions
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormRecord {
    #[serde(flatten)]
    pub summary: FormSummary,
    #[serde(default)]
    pub questions: Vec<QuestionPayload>,
}

/// Accept RFC 3339 as well as the naive timestamps the service emits.
/// Anything unreadable becomes `None` rather than failing the whole record.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

/// Parse an ISO timestamp string to DateTime<Utc>
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_form_id_accepts_number_and_string() {
        let n: FormId = serde_json::from_str("7").unwrap();
        let s: FormId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(n, FormId::Number(7));
        assert_eq!(s, FormId::Text("abc".to_string()));
        assert_eq!(n.to_string(), "7");
        assert_eq!(s.to_string(), "abc");
    }

    #[test]
    fn test_summary_with_rfc3339_timestamp() {
        let json = r#"{"id": 1, "title": "Survey", "description": "d", "created_at": "2024-03-01T12:30:00Z"}"#;
        let summary: FormSummary = serde_json::from_str(json).unwrap();
        let created = summary.created_at.unwrap();
        assert_eq!(created.year(), 2024);
        assert_eq!(created.hour(), 12);
    }

    #[test]
    fn test_summary_with_naive_timestamp() {
        let json = r#"{"id": 1, "title": "Survey", "created_at": "2024-03-01T12:30:00.123456"}"#;
        let summary: FormSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.created_at.unwrap().minute(), 30);
        assert_eq!(summary.description_or_empty(), "");
    }

    #[test]
    fn test_summary_tolerates_missing_and_bad_fields() {
        let json = r#"{"id": 2, "title": "Poll", "description": null, "created_at": "yesterday"}"#;
        let summary: FormSummary = serde_json::from_str(json).unwrap();
        assert!(summary.description.is_none());
        assert!(summary.created_at.is_none());
    }

    #[test]
    fn test_record_decodes_questions() {
        let json = r#"{
            "id": 3,
            "title": "Feedback",
            "description": null,
            "questions": [
                {"id": "q1", "title": "Rate", "type": "linear_scale", "required": true,
                 "options": null, "min_value": 1, "max_value": 10,
                 "min_label": "Bad", "max_label": "Great"}
            ]
        }"#;
        let record: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.summary.id, FormId::Number(3));
        assert_eq!(record.questions.len(), 1);
        assert_eq!(record.questions[0].max_value, Some(10));
    }
}
