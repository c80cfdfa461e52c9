//! Application state and core logic

use crate::api::{ApiError, FormsClientTrait};
use crate::state::{
    AppState, EditorAction, EditorError, EditorRow, Form, PendingDeleteAction, View, ViewParams,
};
use crate::ui::detail_line_count;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Forms service client
    client: Box<dyn FormsClientTrait>,
    /// Where requests go, for the status bar
    endpoint: String,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create the app and load the forms list
    pub async fn new(client: Box<dyn FormsClientTrait>) -> Self {
        let mut app = Self::with_client(client);
        if let Err(e) = app.load_forms().await {
            app.state.status_message = Some(format!("Forms service unavailable: {e}"));
        }
        app
    }

    /// Create the app without touching the network
    pub fn with_client(client: Box<dyn FormsClientTrait>) -> Self {
        let endpoint = client.endpoint();
        Self {
            state: AppState::default(),
            client,
            endpoint,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Handle delete confirmation (modal)
        if self.state.pending_delete.is_some() {
            self.handle_delete_dialog_key(key).await;
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view {
            View::Home => self.handle_home_key(key).await,
            View::FormDetail => self.handle_detail_key(key),
            View::CreateForm => self.handle_create_form_key(key).await,
        }

        Ok(())
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        // Skip form views in history to go back to the last non-form view
        while let Some((view, params)) = self.state.view_history.pop() {
            if view.is_form_view() {
                continue;
            }
            if matches!(view, View::Home) {
                self.state.selected_form = None;
            }
            self.state.current_view = view;
            self.state.view_params = params;
            return;
        }
    }

    /// Reload the forms list from the service
    pub async fn load_forms(&mut self) -> Result<(), ApiError> {
        match self.client.list_forms().await {
            Ok(forms) => {
                tracing::info!("Loaded {} forms", forms.len());
                self.state.api_connected = true;
                self.state.set_forms(forms);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Failed to list forms: {e}");
                self.state.api_connected = false;
                Err(e)
            }
        }
    }

    /// Handle keys in the forms list
    async fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.state.move_selection_down(self.state.forms.len());
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.state.move_selection_up();
            }
            KeyCode::Enter => self.open_selected_form().await,
            KeyCode::Char('n') => self.open_create_form(),
            KeyCode::Char('r') => {
                if let Err(e) = self.load_forms().await {
                    self.push_error(e.user_message("Failed to load forms"));
                }
            }
            KeyCode::Char('d') => {
                let pending = self.state.selected_summary().map(PendingDeleteAction::new);
                if pending.is_some() {
                    self.state.pending_delete = pending;
                }
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Fetch the selected form and show it
    async fn open_selected_form(&mut self) {
        let Some(id) = self.state.selected_summary().map(|f| f.id.clone()) else {
            return;
        };
        match self.client.get_form(&id).await {
            Ok(record) => {
                self.state.selected_form = Some(record);
                self.state.scroll_offset = 0;
                self.navigate(View::FormDetail, ViewParams { form_id: Some(id) });
            }
            Err(e) => {
                tracing::warn!("Failed to load form {id}: {e}");
                self.push_error(e.user_message("Failed to load form"));
            }
        }
    }

    /// Handle keys in the form detail view
    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let lines = self
                    .state
                    .selected_form
                    .as_ref()
                    .map_or(0, detail_line_count);
                self.state.scroll_down(lines);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                self.state.scroll_offset = 0;
                self.go_back();
            }
            _ => {}
        }
    }

    /// Handle keys for the delete confirmation dialog
    async fn handle_delete_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state.pending_delete = None;
            }
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::Char('j')
            | KeyCode::Char('k') => {
                if let Some(ref mut action) = self.state.pending_delete {
                    action.selected_option = !action.selected_option;
                }
            }
            KeyCode::Enter => {
                if let Some(action) = self.state.pending_delete.take() {
                    if action.selected_option {
                        self.delete_form(action).await;
                    }
                }
            }
            _ => {}
        }
    }

    async fn delete_form(&mut self, action: PendingDeleteAction) {
        match self.client.delete_form(&action.form_id).await {
            Ok(()) => {
                tracing::info!("Deleted form {}", action.form_id);
                self.state.forms.retain(|f| f.id != action.form_id);
                self.state.clamp_selection();
                self.state.status_message = Some(format!("Deleted \"{}\"", action.title));
                if let Err(e) = self.load_forms().await {
                    self.push_error(e.user_message("Failed to load forms"));
                }
            }
            Err(e) => {
                tracing::warn!("Failed to delete form {}: {e}", action.form_id);
                self.push_error(e.user_message("Failed to delete form"));
            }
        }
    }

    /// Start a new, empty draft
    fn open_create_form(&mut self) {
        self.state.editor.clear();
        self.navigate(View::CreateForm, ViewParams::default());
    }

    /// Drop the draft and return to the forms list
    fn close_create_form(&mut self) {
        self.state.editor.clear();
        self.go_back();
        if self.state.current_view.is_form_view() {
            self.state.current_view = View::Home;
            self.state.view_params = ViewParams::default();
        }
    }

    /// Handle keys in the create form editor
    async fn handle_create_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_buttons = self.state.editor.is_buttons_row_active();
        let active = self.state.editor.active();

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit_form().await,
            KeyCode::Char('n') if ctrl => self.state.editor.add_question(),
            KeyCode::Char('d') if ctrl => {
                let result = self.state.editor.remove_active_question();
                self.report_editor_error(result);
            }
            KeyCode::Char('o') if ctrl => {
                let result = self.state.editor.add_option_to_active();
                self.report_editor_error(result);
            }
            KeyCode::Char('r') if ctrl => {
                let result = self.state.editor.remove_active_option();
                self.report_editor_error(result);
            }
            KeyCode::Esc => self.close_create_form(),
            KeyCode::Tab | KeyCode::Down => self.state.editor.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.editor.prev_field(),
            // Buttons row
            KeyCode::Left if on_buttons => self.state.editor.prev_button(),
            KeyCode::Right if on_buttons => self.state.editor.next_button(),
            KeyCode::Enter if on_buttons => match self.state.editor.press_button() {
                EditorAction::Submit => self.submit_form().await,
                EditorAction::Cancel => self.close_create_form(),
                EditorAction::None => {}
            },
            // Type selector and required toggle
            KeyCode::Left => self.state.editor.cycle_type(false),
            KeyCode::Right => self.state.editor.cycle_type(true),
            KeyCode::Char(' ') if matches!(active, EditorRow::QuestionType(_)) => {
                self.state.editor.cycle_type(true)
            }
            KeyCode::Char(' ') if matches!(active, EditorRow::Required(_)) => {
                self.state.editor.toggle_required()
            }
            // Text input
            KeyCode::Enter => self.state.editor.input_newline(),
            KeyCode::Char(c) if !ctrl => self.state.editor.input_char(c),
            KeyCode::Backspace => self.state.editor.backspace(),
            _ => {}
        }
    }

    fn report_editor_error(&mut self, result: Result<(), EditorError>) {
        if let Err(e) = result {
            tracing::warn!("Editor operation failed: {e}");
            self.push_error(e.to_string());
        }
    }

    /// Validate the draft and send it. The draft is kept on any failure.
    async fn submit_form(&mut self) {
        if let Err(e) = self.state.editor.draft.validate() {
            self.push_error(e.to_string());
            return;
        }

        let payload = self.state.editor.draft.to_submission_payload();
        match self.client.create_form(&payload).await {
            Ok(created) => {
                tracing::info!(
                    "Created form {} with {} questions",
                    created.id,
                    payload.questions.len()
                );
                self.close_create_form();
                if let Err(e) = self.load_forms().await {
                    self.push_error(e.user_message("Failed to load forms"));
                }
                self.state.status_message = Some(format!("Form created (ID: {})", created.id));
            }
            Err(e) => {
                tracing::warn!("Form submission failed: {e}");
                self.push_error(e.user_message("Failed to create form"));
            }
        }
    }
}
