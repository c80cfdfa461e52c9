//! Form domain layer
//!
//! The draft model, its single-field updates, the submission payload it
//! serializes into, and the cursor the create-form view edits it through.

mod draft;
mod editor;
mod field;
mod payload;

pub use draft::{EditorError, QuestionType};
pub use editor::{DraftEditor, EditorAction, EditorButton, EditorRow, Form};
pub use payload::{
    QuestionPayload, SubmissionPayload, DEFAULT_MAX_LABEL, DEFAULT_MAX_VALUE, DEFAULT_MIN_LABEL,
    DEFAULT_MIN_VALUE,
};

#[cfg(test)]
pub use draft::FormDraft;
#[cfg(test)]
pub use payload::OptionPayload;
