//! Editor state for the create-form view
//!
//! Lays the draft out as a flat list of focusable rows and turns keystroke
//! level edits (push a char, pop a char, cycle a type) into draft mutations.

use super::draft::{EditorError, FormDraft, QuestionType};
use super::field::QuestionUpdate;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// A focusable row of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorRow {
    Title,
    Description,
    QuestionTitle(usize),
    QuestionType(usize),
    Required(usize),
    MinValue(usize),
    MaxValue(usize),
    MinLabel(usize),
    MaxLabel(usize),
    /// (question, option)
    Option(usize, usize),
    Buttons,
}

impl EditorRow {
    /// Question the row belongs to, if any
    pub fn question_index(&self) -> Option<usize> {
        match *self {
            Self::QuestionTitle(q)
            | Self::QuestionType(q)
            | Self::Required(q)
            | Self::MinValue(q)
            | Self::MaxValue(q)
            | Self::MinLabel(q)
            | Self::MaxLabel(q)
            | Self::Option(q, _) => Some(q),
            Self::Title | Self::Description | Self::Buttons => None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::MinValue(_) | Self::MaxValue(_))
    }

    /// Rows edited by typing
    pub fn accepts_text(&self) -> bool {
        !matches!(
            self,
            Self::QuestionType(_) | Self::Required(_) | Self::Buttons
        )
    }
}

/// Buttons on the last row of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorButton {
    Cancel,
    AddQuestion,
    #[default]
    Save,
}

impl EditorButton {
    pub const ALL: [EditorButton; 3] = [Self::Cancel, Self::AddQuestion, Self::Save];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Cancel => "Cancel",
            Self::AddQuestion => "Add question",
            Self::Save => "Save form",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Cancel => Self::AddQuestion,
            Self::AddQuestion => Self::Save,
            Self::Save => Self::Cancel,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Cancel => Self::Save,
            Self::AddQuestion => Self::Cancel,
            Self::Save => Self::AddQuestion,
        }
    }
}

/// What the app should do after a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    None,
    Cancel,
    Submit,
}

/// Draft plus the cursor over it
#[derive(Debug, Clone, Default)]
pub struct DraftEditor {
    pub draft: FormDraft,
    pub active_row: usize,
    pub selected_button: EditorButton,
}

impl DraftEditor {
    pub fn new() -> Self {
        Self {
            draft: FormDraft::new(),
            active_row: 0,
            selected_button: EditorButton::default(),
        }
    }

    /// Rows in display order for the current draft
    pub fn rows(&self) -> Vec<EditorRow> {
        let mut rows = vec![EditorRow::Title, EditorRow::Description];
        for (q, question) in self.draft.questions.iter().enumerate() {
            rows.push(EditorRow::QuestionTitle(q));
            rows.push(EditorRow::QuestionType(q));
            rows.push(EditorRow::Required(q));
            if question.question_type.is_scale() {
                rows.extend([
                    EditorRow::MinValue(q),
                    EditorRow::MaxValue(q),
                    EditorRow::MinLabel(q),
                    EditorRow::MaxLabel(q),
                ]);
            } else if question.question_type.is_choice() {
                rows.extend((0..question.options.len()).map(|o| EditorRow::Option(q, o)));
            }
        }
        rows.push(EditorRow::Buttons);
        rows
    }

    pub fn active(&self) -> EditorRow {
        self.rows()
            .get(self.active_row)
            .copied()
            .unwrap_or(EditorRow::Buttons)
    }

    /// Move focus to a row if it is currently visible
    pub fn focus(&mut self, row: EditorRow) {
        if let Some(index) = self.rows().iter().position(|r| *r == row) {
            self.active_row = index;
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active() == EditorRow::Buttons
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.next();
    }

    pub fn prev_button(&mut self) {
        self.selected_button = self.selected_button.prev();
    }

    /// Run the selected button
    pub fn press_button(&mut self) -> EditorAction {
        match self.selected_button {
            EditorButton::Cancel => EditorAction::Cancel,
            EditorButton::AddQuestion => {
                self.add_question();
                EditorAction::None
            }
            EditorButton::Save => EditorAction::Submit,
        }
    }

    /// Current text of a typed row
    pub fn row_text(&self, row: EditorRow) -> Option<String> {
        let question = |q: usize| self.draft.question(q);
        match row {
            EditorRow::Title => Some(self.draft.title.clone()),
            EditorRow::Description => Some(self.draft.description.clone()),
            EditorRow::QuestionTitle(q) => question(q).map(|x| x.title.clone()),
            EditorRow::MinValue(q) => question(q).map(|x| bound_text(x.min_value)),
            EditorRow::MaxValue(q) => question(q).map(|x| bound_text(x.max_value)),
            EditorRow::MinLabel(q) => question(q).map(|x| x.min_label.clone()),
            EditorRow::MaxLabel(q) => question(q).map(|x| x.max_label.clone()),
            EditorRow::Option(q, o) => {
                question(q).and_then(|x| x.options.get(o)).map(|x| x.value.clone())
            }
            EditorRow::QuestionType(_) | EditorRow::Required(_) | EditorRow::Buttons => None,
        }
    }

    fn set_row_text(&mut self, row: EditorRow, text: String) -> Result<(), EditorError> {
        match row {
            EditorRow::Title => self.draft.set_title(text),
            EditorRow::Description => self.draft.set_description(text),
            EditorRow::QuestionTitle(q) => {
                self.draft.update_question(q, QuestionUpdate::Title(text))?
            }
            EditorRow::MinValue(q) => self.draft.update_question_field(q, "min_value", &text)?,
            EditorRow::MaxValue(q) => self.draft.update_question_field(q, "max_value", &text)?,
            EditorRow::MinLabel(q) => {
                self.draft.update_question(q, QuestionUpdate::MinLabel(text))?
            }
            EditorRow::MaxLabel(q) => {
                self.draft.update_question(q, QuestionUpdate::MaxLabel(text))?
            }
            EditorRow::Option(q, o) => self.draft.update_option(q, o, text)?,
            EditorRow::QuestionType(_) | EditorRow::Required(_) | EditorRow::Buttons => {}
        }
        Ok(())
    }

    /// Type a character into the active row. Numeric rows take digits only.
    pub fn input_char(&mut self, c: char) {
        let row = self.active();
        if !row.accepts_text() || (row.is_numeric() && !c.is_ascii_digit()) {
            return;
        }
        if let Some(mut text) = self.row_text(row) {
            text.push(c);
            if let Err(e) = self.set_row_text(row, text) {
                tracing::debug!("Ignored input on {row:?}: {e}");
            }
        }
    }

    /// Append a newline to the description
    pub fn input_newline(&mut self) {
        if self.active().is_multiline() {
            self.draft.description.push('\n');
        }
    }

    pub fn backspace(&mut self) {
        let row = self.active();
        if let Some(mut text) = self.row_text(row) {
            if text.pop().is_some() {
                if let Err(e) = self.set_row_text(row, text) {
                    tracing::debug!("Ignored backspace on {row:?}: {e}");
                }
            }
        }
    }

    /// Cycle the type of the active question's type row
    pub fn cycle_type(&mut self, forward: bool) {
        if let EditorRow::QuestionType(q) = self.active() {
            if let Some(current) = self.draft.question(q).map(|x| x.question_type) {
                let next = if forward { current.next() } else { current.prev() };
                self.set_type(q, next);
            }
        }
    }

    fn set_type(&mut self, q: usize, question_type: QuestionType) {
        // type row index does not move when rows below it change
        if self
            .draft
            .update_question(q, QuestionUpdate::Type(question_type))
            .is_ok()
        {
            tracing::debug!("question {q} is now {}", question_type.as_str());
            self.focus(EditorRow::QuestionType(q));
        }
    }

    pub fn toggle_required(&mut self) {
        if let EditorRow::Required(q) = self.active() {
            let Some(required) = self.draft.question(q).map(|x| !x.required) else {
                return;
            };
            match self.draft.update_question(q, QuestionUpdate::Required(required)) {
                Ok(()) => tracing::debug!("question {q} required: {required}"),
                Err(e) => tracing::debug!("required toggle ignored: {e}"),
            }
        }
    }

    /// Append a question and focus its title
    pub fn add_question(&mut self) {
        self.draft.add_question();
        let q = self.draft.questions.len() - 1;
        self.focus(EditorRow::QuestionTitle(q));
    }

    /// Remove the question the cursor is on
    pub fn remove_active_question(&mut self) -> Result<(), EditorError> {
        let Some(q) = self.active().question_index() else {
            return Ok(());
        };
        self.draft.remove_question(q)?;
        if self.draft.questions.is_empty() {
            self.focus(EditorRow::Description);
        } else {
            self.focus(EditorRow::QuestionTitle(q.min(self.draft.questions.len() - 1)));
        }
        Ok(())
    }

    /// Add an option to the active question and focus it
    pub fn add_option_to_active(&mut self) -> Result<(), EditorError> {
        let Some(q) = self.active().question_index() else {
            return Ok(());
        };
        self.draft.add_option(q)?;
        let o = self.draft.questions[q].options.len() - 1;
        self.focus(EditorRow::Option(q, o));
        Ok(())
    }

    /// Remove the option the cursor is on
    pub fn remove_active_option(&mut self) -> Result<(), EditorError> {
        let EditorRow::Option(q, o) = self.active() else {
            return Ok(());
        };
        self.draft.remove_option(q, o)?;
        let remaining = self.draft.questions[q].options.len();
        if remaining == 0 {
            self.focus(EditorRow::Required(q));
        } else {
            self.focus(EditorRow::Option(q, o.min(remaining - 1)));
        }
        Ok(())
    }

    /// Reset to an empty draft
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl Form for DraftEditor {
    fn field_count(&self) -> usize {
        self.rows().len()
    }
    fn active_field(&self) -> usize {
        self.active_row
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_row = index.min(self.field_count() - 1);
    }
}

fn bound_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
