//! Application state definitions

use super::forms::DraftEditor;
use crate::api::{FormId, FormRecord, FormSummary};
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    /// Forms list
    #[default]
    Home,
    FormDetail,
    CreateForm,
}

impl View {
    /// Form views are skipped when navigating back
    pub fn is_form_view(&self) -> bool {
        matches!(self, View::CreateForm)
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    pub form_id: Option<FormId>,
}

/// A delete waiting for confirmation
#[derive(Debug, Clone)]
pub struct PendingDeleteAction {
    pub form_id: FormId,
    pub title: String,
    /// true = Delete, false = Cancel
    pub selected_option: bool,
}

impl PendingDeleteAction {
    pub fn new(form: &FormSummary) -> Self {
        Self {
            form_id: form.id.clone(),
            title: form.title.clone(),
            selected_option: false,
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Data
    pub forms: Vec<FormSummary>,
    pub selected_form: Option<FormRecord>,
    pub last_refreshed: Option<DateTime<Local>>,

    // Selection
    pub selected_index: usize,

    // UI state
    pub scroll_offset: usize,
    pub api_connected: bool,
    pub status_message: Option<String>,

    // Modals
    pub error_queue: VecDeque<String>,
    pub pending_delete: Option<PendingDeleteAction>,

    // Create form editor
    pub editor: DraftEditor,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Keep the selection inside the list after it shrinks
    pub fn clamp_selection(&mut self) {
        if self.selected_index >= self.forms.len() {
            self.selected_index = self.forms.len().saturating_sub(1);
        }
    }

    /// Scroll one line, keeping the last of `line_count` lines on screen
    pub fn scroll_down(&mut self, line_count: usize) {
        let max_offset = line_count.saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(1).min(max_offset);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Form under the cursor on the home view
    pub fn selected_summary(&self) -> Option<&FormSummary> {
        self.forms.get(self.selected_index)
    }

    /// Replace the forms list after a refresh
    pub fn set_forms(&mut self, forms: Vec<FormSummary>) {
        self.forms = forms;
        self.last_refreshed = Some(Local::now());
        self.clamp_selection();
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
