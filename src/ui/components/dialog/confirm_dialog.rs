//! Confirmation dialog for deleting a form

use crate::state::PendingDeleteAction;
use crate::ui::widgets::{centered_rect, truncate_str};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 10;

/// Render a confirmation dialog for a pending delete
pub fn render_confirm_dialog(frame: &mut Frame, action: &PendingDeleteAction) {
    let dialog_area = centered_rect(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog_area);

    let title = truncate_str(&action.title, (DIALOG_WIDTH - 12) as usize);
    let white = Style::default().fg(Color::White);

    let mut content = vec![
        Line::from(Span::styled(
            "Delete Form",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Permanently delete", white)),
        Line::from(vec![
            Span::styled(format!("#{} ", action.form_id), Style::default().fg(Color::Cyan)),
            Span::styled(format!("\"{title}\""), white),
            Span::styled("?", white),
        ]),
        Line::from(""),
    ];

    // Cancel is selected by default
    for (is_delete, label, color) in [(false, "Cancel", Color::White), (true, "Delete", Color::Red)]
    {
        let is_selected = action.selected_option == is_delete;
        let prefix = if is_selected { "▸ " } else { "  " };
        let style = if is_selected {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        content.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));
    }

    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(dialog, dialog_area);
}
