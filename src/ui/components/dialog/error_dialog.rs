//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, queued: usize) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];
    if queued > 0 {
        hint.push(Span::styled(
            format!(" ({queued} more)"),
            Style::default().fg(Color::DarkGray),
        ));
    }

    render_dialog(
        frame,
        DialogConfig {
            title: "Error",
            accent: Color::Red,
            message: error_message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}
