//! UI module for rendering the TUI

mod components;
mod detail;
mod forms;
mod home;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::{render_confirm_dialog, render_error_dialog};
use ratatui::Frame;

pub use detail::line_count as detail_line_count;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    // Draw main content based on current view
    match &app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::FormDetail => detail::draw(frame, main_area, app),
        View::CreateForm => forms::draw_create_form(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Modal overlays last so they sit on top
    if let Some(action) = &app.state.pending_delete {
        render_confirm_dialog(frame, action);
    }
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_queue.len() - 1);
    }
}
