//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SAVE_SHORTCUT;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Content area with the bottom line reserved for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Connection status
    let conn_status = if app.state.api_connected {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    };
    spans.push(conn_status);

    // View-specific hints
    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Home => "j/k:nav  Enter:view  n:new  r:refresh  d:delete  q:quit".to_string(),
        View::FormDetail => "j/k:scroll  Esc:back".to_string(),
        View::CreateForm => format!("Tab:next  {SAVE_SHORTCUT}:submit  Esc:cancel"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_reserves_status_line() {
        let (content, status) = create_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(content.height, 23);
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_create_form_hint_mentions_submit() {
        assert!(get_view_hints(&View::CreateForm).contains("Ctrl+S:submit"));
    }
}
