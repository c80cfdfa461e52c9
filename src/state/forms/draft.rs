//! Form draft: the in-memory tree a user edits before submission
//!
//! A draft owns its questions, and each question owns its options. Every
//! mutation is index-addressed and bounds-checked; an invalid index returns an
//! [`EditorError`] and leaves the draft untouched.

use super::field::QuestionUpdate;
use super::payload::{
    OptionPayload, QuestionPayload, SubmissionPayload, DEFAULT_MAX_LABEL, DEFAULT_MAX_VALUE,
    DEFAULT_MIN_LABEL, DEFAULT_MIN_VALUE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by draft mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("question index {index} is out of range (form has {len} questions)")]
    QuestionIndexOutOfRange { index: usize, len: usize },

    #[error("option index {index} is out of range (question {question} has {len} options)")]
    OptionIndexOutOfRange {
        question: usize,
        index: usize,
        len: usize,
    },

    #[error("unknown question field '{0}'")]
    UnknownField(String),

    #[error("invalid value '{value}' for field '{field}'")]
    InvalidValue { field: String, value: String },
}

/// Required-field violations detected before submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Form title is required")]
    MissingTitle,

    #[error("Question {} needs a title", .0 + 1)]
    MissingQuestionTitle(usize),
}

/// Question type. Wire names follow the forms service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionType {
    #[default]
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "radio", alias = "single_choice")]
    SingleChoice,
    #[serde(rename = "checkbox", alias = "multi_choice")]
    MultiChoice,
    #[serde(rename = "dropdown")]
    Dropdown,
    #[serde(rename = "linear_scale")]
    LinearScale,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        Self::Text,
        Self::SingleChoice,
        Self::MultiChoice,
        Self::Dropdown,
        Self::LinearScale,
    ];

    pub fn next(&self) -> Self {
        match self {
            Self::Text => Self::SingleChoice,
            Self::SingleChoice => Self::MultiChoice,
            Self::MultiChoice => Self::Dropdown,
            Self::Dropdown => Self::LinearScale,
            Self::LinearScale => Self::Text,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Text => Self::LinearScale,
            Self::SingleChoice => Self::Text,
            Self::MultiChoice => Self::SingleChoice,
            Self::Dropdown => Self::MultiChoice,
            Self::LinearScale => Self::Dropdown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "Text answer",
            Self::SingleChoice => "Single choice",
            Self::MultiChoice => "Multiple choice",
            Self::Dropdown => "Dropdown",
            Self::LinearScale => "Linear scale",
        }
    }

    /// Name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::SingleChoice => "radio",
            Self::MultiChoice => "checkbox",
            Self::Dropdown => "dropdown",
            Self::LinearScale => "linear_scale",
        }
    }

    /// Parse a wire name or one of its aliases
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single_choice" => Some(Self::SingleChoice),
            "multi_choice" => Some(Self::MultiChoice),
            _ => Self::ALL.into_iter().find(|t| t.as_str() == s),
        }
    }

    /// Whether the question presents a list of options to pick from
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::SingleChoice | Self::MultiChoice | Self::Dropdown
        )
    }

    pub fn is_scale(&self) -> bool {
        matches!(self, Self::LinearScale)
    }
}

/// One answer option of a choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDraft {
    pub id: String,
    pub value: String,
}

impl OptionDraft {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            value: String::new(),
        }
    }
}

/// One question of a draft.
///
/// Options and scale fields are kept for every type so that switching the
/// type back and forth never loses input; only the fields relevant to the
/// current type reach the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: String,
    pub title: String,
    pub question_type: QuestionType,
    pub required: bool,
    pub options: Vec<OptionDraft>,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
    pub min_label: String,
    pub max_label: String,
}

impl QuestionDraft {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            question_type: QuestionType::Text,
            required: false,
            options: Vec::new(),
            min_value: None,
            max_value: None,
            min_label: String::new(),
            max_label: String::new(),
        }
    }

    /// Apply a single-field update, leaving every other field untouched
    pub fn apply(&mut self, update: QuestionUpdate) {
        match update {
            QuestionUpdate::Title(title) => self.title = title,
            QuestionUpdate::Type(question_type) => self.question_type = question_type,
            QuestionUpdate::Required(required) => self.required = required,
            QuestionUpdate::MinValue(value) => self.min_value = value,
            QuestionUpdate::MaxValue(value) => self.max_value = value,
            QuestionUpdate::MinLabel(label) => self.min_label = label,
            QuestionUpdate::MaxLabel(label) => self.max_label = label,
        }
    }

    fn to_payload(&self) -> QuestionPayload {
        let options = (self.question_type != QuestionType::Text).then(|| {
            self.options
                .iter()
                .map(|o| OptionPayload {
                    id: o.id.clone(),
                    value: o.value.clone(),
                })
                .collect()
        });

        let scale = self.question_type.is_scale();

        QuestionPayload {
            id: self.id.clone(),
            title: self.title.clone(),
            question_type: self.question_type,
            required: self.required,
            options,
            min_value: scale.then(|| self.min_value.unwrap_or(DEFAULT_MIN_VALUE)),
            max_value: scale.then(|| self.max_value.unwrap_or(DEFAULT_MAX_VALUE)),
            min_label: scale.then(|| label_or_default(&self.min_label, DEFAULT_MIN_LABEL)),
            max_label: scale.then(|| label_or_default(&self.max_label, DEFAULT_MAX_LABEL)),
        }
    }
}

fn label_or_default(label: &str, default: &str) -> String {
    if label.is_empty() {
        default.to_string()
    } else {
        label.to_string()
    }
}

/// A form being authored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionDraft>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Append an empty text question and hand it back for editing
    pub fn add_question(&mut self) -> &mut QuestionDraft {
        self.questions.push(QuestionDraft::new());
        let last = self.questions.len() - 1;
        &mut self.questions[last]
    }

    pub fn remove_question(&mut self, index: usize) -> Result<QuestionDraft, EditorError> {
        self.check_question(index)?;
        Ok(self.questions.remove(index))
    }

    pub fn update_question(
        &mut self,
        index: usize,
        update: QuestionUpdate,
    ) -> Result<(), EditorError> {
        let question = self.question_mut(index)?;
        tracing::trace!("question {index}: set {}", update.field().name());
        question.apply(update);
        Ok(())
    }

    /// String-keyed variant of [`FormDraft::update_question`]
    pub fn update_question_field(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), EditorError> {
        self.check_question(index)?;
        let update = QuestionUpdate::parse(field, value)?;
        self.update_question(index, update)
    }

    /// Append an empty option. Allowed for every question type.
    pub fn add_option(&mut self, question_index: usize) -> Result<&mut OptionDraft, EditorError> {
        let question = self.question_mut(question_index)?;
        question.options.push(OptionDraft::new());
        let last = question.options.len() - 1;
        Ok(&mut question.options[last])
    }

    pub fn remove_option(
        &mut self,
        question_index: usize,
        option_index: usize,
    ) -> Result<OptionDraft, EditorError> {
        self.check_option(question_index, option_index)?;
        Ok(self.questions[question_index].options.remove(option_index))
    }

    pub fn update_option(
        &mut self,
        question_index: usize,
        option_index: usize,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.check_option(question_index, option_index)?;
        self.questions[question_index].options[option_index].value = value.into();
        Ok(())
    }

    pub fn question(&self, index: usize) -> Option<&QuestionDraft> {
        self.questions.get(index)
    }

    pub fn question_mut(&mut self, index: usize) -> Result<&mut QuestionDraft, EditorError> {
        let len = self.questions.len();
        self.questions
            .get_mut(index)
            .ok_or(EditorError::QuestionIndexOutOfRange { index, len })
    }

    /// Check the required fields the submit button would enforce
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingTitle);
        }
        if let Some(index) = self.questions.iter().position(|q| q.title.trim().is_empty()) {
            return Err(ValidationError::MissingQuestionTitle(index));
        }
        Ok(())
    }

    /// Snapshot the draft into the request body sent to the forms service
    pub fn to_submission_payload(&self) -> SubmissionPayload {
        SubmissionPayload {
            title: self.title.clone(),
            description: self.description.clone(),
            questions: self.questions.iter().map(QuestionDraft::to_payload).collect(),
        }
    }

    fn check_question(&self, index: usize) -> Result<(), EditorError> {
        if index < self.questions.len() {
            Ok(())
        } else {
            Err(EditorError::QuestionIndexOutOfRange {
                index,
                len: self.questions.len(),
            })
        }
    }

    fn check_option(&self, question_index: usize, option_index: usize) -> Result<(), EditorError> {
        self.check_question(question_index)?;
        let len = self.questions[question_index].options.len();
        if option_index < len {
            Ok(())
        } else {
            Err(EditorError::OptionIndexOutOfRange {
                question: question_index,
                index: option_index,
                len,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft_with_questions(n: usize) -> FormDraft {
        let mut draft = FormDraft::new();
        for i in 0..n {
            draft.add_question().title = format!("Q{i}");
        }
        draft
    }

    mod questions {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_question_defaults() {
            let mut draft = FormDraft::new();
            let q = draft.add_question();
            assert_eq!(q.title, "");
            assert_eq!(q.question_type, QuestionType::Text);
            assert!(!q.required);
            assert!(q.options.is_empty());
            assert!(!q.id.is_empty());
        }

        #[test]
        fn test_question_ids_are_unique() {
            let draft = draft_with_questions(50);
            let mut ids: Vec<_> = draft.questions.iter().map(|q| q.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), 50);
        }

        #[test]
        fn test_add_then_remove_restores_list() {
            let mut draft = draft_with_questions(3);
            let before = draft.questions.clone();
            draft.add_question();
            draft.remove_question(3).unwrap();
            assert_eq!(draft.questions, before);
        }

        #[test]
        fn test_remove_question_shifts_up() {
            let mut draft = draft_with_questions(4);
            let removed = draft.remove_question(1).unwrap();
            assert_eq!(removed.title, "Q1");
            let titles: Vec<_> = draft.questions.iter().map(|q| q.title.as_str()).collect();
            assert_eq!(titles, vec!["Q0", "Q2", "Q3"]);
        }

        #[test]
        fn test_remove_question_out_of_range_leaves_draft() {
            let mut draft = draft_with_questions(2);
            let before = draft.clone();
            let err = draft.remove_question(2).unwrap_err();
            assert_eq!(err, EditorError::QuestionIndexOutOfRange { index: 2, len: 2 });
            assert_eq!(draft, before);
        }

        #[test]
        fn test_update_title_touches_only_target() {
            let mut draft = draft_with_questions(3);
            draft.questions[1].required = true;
            let before = draft.clone();

            draft
                .update_question(1, QuestionUpdate::Title("Changed".into()))
                .unwrap();

            assert_eq!(draft.questions[1].title, "Changed");
            let mut expected = before;
            expected.questions[1].title = "Changed".into();
            assert_eq!(draft, expected);
        }

        #[test]
        fn test_update_question_out_of_range() {
            let mut draft = draft_with_questions(1);
            let err = draft
                .update_question(5, QuestionUpdate::Required(true))
                .unwrap_err();
            assert!(matches!(err, EditorError::QuestionIndexOutOfRange { index: 5, .. }));
        }

        #[test]
        fn test_update_question_field_by_name() {
            let mut draft = draft_with_questions(1);
            draft.update_question_field(0, "type", "checkbox").unwrap();
            draft.update_question_field(0, "required", "true").unwrap();
            assert_eq!(draft.questions[0].question_type, QuestionType::MultiChoice);
            assert!(draft.questions[0].required);
        }

        #[test]
        fn test_update_question_field_rejects_unknown_field() {
            let mut draft = draft_with_questions(1);
            let before = draft.clone();
            let err = draft.update_question_field(0, "color", "red").unwrap_err();
            assert_eq!(err, EditorError::UnknownField("color".into()));
            assert_eq!(draft, before);
        }

        #[test]
        fn test_type_switch_keeps_dormant_fields() {
            let mut draft = draft_with_questions(1);
            draft
                .update_question(0, QuestionUpdate::Type(QuestionType::Dropdown))
                .unwrap();
            draft.add_option(0).unwrap().value = "Red".into();
            draft
                .update_question(0, QuestionUpdate::Type(QuestionType::Text))
                .unwrap();
            assert_eq!(draft.questions[0].options.len(), 1);

            draft
                .update_question(0, QuestionUpdate::Type(QuestionType::Dropdown))
                .unwrap();
            let payload = draft.to_submission_payload();
            assert_eq!(payload.questions[0].options.as_ref().unwrap()[0].value, "Red");
        }
    }

    mod options {
        use super::*;
        use pretty_assertions::assert_eq;

        fn question_with_options(values: &[&str]) -> FormDraft {
            let mut draft = draft_with_questions(1);
            draft.questions[0].question_type = QuestionType::SingleChoice;
            for v in values {
                draft.add_option(0).unwrap().value = v.to_string();
            }
            draft
        }

        #[test]
        fn test_add_option_allowed_on_text_question() {
            let mut draft = draft_with_questions(1);
            assert!(draft.add_option(0).is_ok());
            assert_eq!(draft.questions[0].options.len(), 1);
        }

        #[test]
        fn test_add_option_invalid_question() {
            let mut draft = FormDraft::new();
            assert!(draft.add_option(0).is_err());
        }

        #[test]
        fn test_remove_option_preserves_order() {
            let mut draft = question_with_options(&["a", "b", "c", "d"]);
            draft.remove_option(0, 1).unwrap();
            let values: Vec<_> = draft.questions[0]
                .options
                .iter()
                .map(|o| o.value.as_str())
                .collect();
            assert_eq!(values, vec!["a", "c", "d"]);
        }

        #[test]
        fn test_remove_option_out_of_range() {
            let mut draft = question_with_options(&["a"]);
            let err = draft.remove_option(0, 1).unwrap_err();
            assert_eq!(
                err,
                EditorError::OptionIndexOutOfRange {
                    question: 0,
                    index: 1,
                    len: 1
                }
            );
            assert!(draft.remove_option(3, 0).is_err());
            assert_eq!(draft.questions[0].options.len(), 1);
        }

        #[test]
        fn test_update_option_changes_value_only() {
            let mut draft = question_with_options(&["a", "b"]);
            let id = draft.questions[0].options[1].id.clone();
            draft.update_option(0, 1, "bee").unwrap();
            assert_eq!(draft.questions[0].options[1].value, "bee");
            assert_eq!(draft.questions[0].options[1].id, id);
            assert_eq!(draft.questions[0].options[0].value, "a");
        }

        #[test]
        fn test_update_option_without_options_is_error() {
            let mut draft = draft_with_questions(1);
            let before = draft.clone();
            assert!(draft.update_option(0, 0, "x").is_err());
            assert_eq!(draft, before);
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_title() {
            let draft = FormDraft::new();
            assert_eq!(draft.validate(), Err(ValidationError::MissingTitle));
        }

        #[test]
        fn test_missing_question_title() {
            let mut draft = draft_with_questions(2);
            draft.set_title("Survey");
            draft.questions[1].title.clear();
            assert_eq!(
                draft.validate(),
                Err(ValidationError::MissingQuestionTitle(1))
            );
            assert_eq!(
                ValidationError::MissingQuestionTitle(1).to_string(),
                "Question 2 needs a title"
            );
        }

        #[test]
        fn test_valid_draft() {
            let mut draft = draft_with_questions(2);
            draft.set_title("Survey");
            assert!(draft.validate().is_ok());
        }
    }

    mod payload {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_question_has_no_options_key() {
            let mut draft = FormDraft::new();
            draft.set_title("Survey");
            draft.add_question();
            draft
                .update_question(0, QuestionUpdate::Title("Name?".into()))
                .unwrap();
            draft
                .update_question(0, QuestionUpdate::Required(true))
                .unwrap();
            // dormant option must not leak into the payload
            draft.add_option(0).unwrap();
            let id = draft.questions[0].id.clone();

            let value = serde_json::to_value(draft.to_submission_payload()).unwrap();
            assert_eq!(
                value,
                json!({
                    "title": "Survey",
                    "description": "",
                    "questions": [
                        {"id": id, "title": "Name?", "type": "text", "required": true}
                    ]
                })
            );
        }

        #[test]
        fn test_linear_scale_defaults() {
            let mut draft = FormDraft::new();
            draft.set_title("Rate us");
            let q = draft.add_question();
            q.title = "How was it?".into();
            q.question_type = QuestionType::LinearScale;
            q.min_label = "Bad".into();
            q.max_label = "Good".into();

            let value = serde_json::to_value(draft.to_submission_payload()).unwrap();
            let question = &value["questions"][0];
            assert_eq!(question["type"], "linear_scale");
            assert_eq!(question["min_value"], 1);
            assert_eq!(question["max_value"], 5);
            assert_eq!(question["min_label"], "Bad");
            assert_eq!(question["max_label"], "Good");
        }

        #[test]
        fn test_linear_scale_empty_labels_fall_back() {
            let mut draft = FormDraft::new();
            let q = draft.add_question();
            q.question_type = QuestionType::LinearScale;
            q.min_value = Some(0);
            q.max_value = Some(10);

            let payload = draft.to_submission_payload();
            let question = &payload.questions[0];
            assert_eq!(question.min_value, Some(0));
            assert_eq!(question.max_value, Some(10));
            assert_eq!(question.min_label.as_deref(), Some("Min"));
            assert_eq!(question.max_label.as_deref(), Some("Max"));
        }

        #[test]
        fn test_scale_fields_omitted_for_other_types() {
            let mut draft = FormDraft::new();
            let q = draft.add_question();
            q.question_type = QuestionType::Dropdown;
            q.min_value = Some(3);
            q.min_label = "Low".into();

            let value = serde_json::to_value(draft.to_submission_payload()).unwrap();
            let question = value["questions"][0].as_object().unwrap();
            assert!(!question.contains_key("min_value"));
            assert!(!question.contains_key("max_value"));
            assert!(!question.contains_key("min_label"));
            assert!(!question.contains_key("max_label"));
            assert_eq!(question["options"], json!([]));
        }

        #[test]
        fn test_choice_options_serialized_in_order() {
            let mut draft = FormDraft::new();
            draft.add_question().question_type = QuestionType::MultiChoice;
            draft.add_option(0).unwrap().value = "Tea".into();
            draft.add_option(0).unwrap().value = "Coffee".into();

            let payload = draft.to_submission_payload();
            let values: Vec<_> = payload.questions[0]
                .options
                .as_ref()
                .unwrap()
                .iter()
                .map(|o| o.value.as_str())
                .collect();
            assert_eq!(values, vec!["Tea", "Coffee"]);
            assert_eq!(
                serde_json::to_value(&payload).unwrap()["questions"][0]["type"],
                "checkbox"
            );
        }

        #[test]
        fn test_payload_is_pure_and_deterministic() {
            let mut draft = draft_with_questions(2);
            draft.questions[1].question_type = QuestionType::LinearScale;
            let before = draft.clone();
            let first = draft.to_submission_payload();
            let second = draft.to_submission_payload();
            assert_eq!(first, second);
            assert_eq!(draft, before);
        }
    }

    mod question_type {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_cycles_through_all() {
            let mut t = QuestionType::Text;
            for expected in QuestionType::ALL.iter().skip(1) {
                t = t.next();
                assert_eq!(t, *expected);
            }
            assert_eq!(t.next(), QuestionType::Text);
        }

        #[test]
        fn test_prev_inverts_next() {
            for t in QuestionType::ALL {
                assert_eq!(t.next().prev(), t);
            }
        }

        #[test]
        fn test_deserialize_aliases() {
            let t: QuestionType = serde_json::from_str("\"single_choice\"").unwrap();
            assert_eq!(t, QuestionType::SingleChoice);
            let t: QuestionType = serde_json::from_str("\"checkbox\"").unwrap();
            assert_eq!(t, QuestionType::MultiChoice);
        }

        #[test]
        fn test_parse_matches_wire_names() {
            for t in QuestionType::ALL {
                assert_eq!(QuestionType::parse(t.as_str()), Some(t));
            }
            assert_eq!(QuestionType::parse("slider"), None);
        }
    }
}
