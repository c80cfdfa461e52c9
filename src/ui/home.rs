//! Forms list view

use super::widgets::{render_scrollable_list, truncate_str};
use crate::app::App;
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the forms list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let forms = &app.state.forms;
    let block = Block::default()
        .title(format!(" Forms ({}) ", forms.len()))
        .title_bottom(Line::from(format!(" {} ", app.endpoint())).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if forms.is_empty() {
        let message = if app.state.api_connected {
            "No forms yet.\nPress 'n' to create a form."
        } else {
            "Could not load forms.\nPress 'r' to retry or 'n' to create a form."
        };
        let content = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(content, area);
        return;
    }

    // Leave room for the id, created date and borders
    let title_width = area.width.saturating_sub(28) as usize;

    let items: Vec<ListItem> = forms
        .iter()
        .enumerate()
        .map(|(idx, form)| {
            let is_selected = idx == app.state.selected_index;
            let prefix = if is_selected { "▸ " } else { "  " };
            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let created = form
                .created_at
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default();

            let mut spans = vec![
                Span::styled(prefix, style),
                Span::styled(format!("#{:<5}", form.id.to_string()), Style::default().fg(Color::Cyan)),
                Span::styled(truncate_str(&form.title, title_width), style),
            ];
            if !form.description_or_empty().is_empty() {
                spans.push(Span::styled(
                    format!("  {}", truncate_str(form.description_or_empty(), 30)),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if !created.is_empty() {
                spans.push(Span::styled(
                    format!("  {created}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(block);
    render_scrollable_list(frame, area, list, app.state.selected_index);
}
