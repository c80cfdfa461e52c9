//! Base dialog component

use crate::ui::widgets::centered_rect;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint shown at the bottom, e.g. "Press Enter to dismiss"
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding + 2) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);

    let hint_width: usize = config
        .hint
        .as_ref()
        .map(|spans| spans.iter().map(|s| s.width()).sum())
        .unwrap_or(0);
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count())
        .max(hint_width) as u16;
    let dialog_width = (content_width + padding + 2).min(config.max_width);

    // title + blank + message + (blank + hint) + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let dialog_height = (2 + wrapped_lines.len() as u16 + hint_lines + 2).max(5);

    let dialog_area = centered_rect(frame.area(), dialog_width, dialog_height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.accent))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(dialog, dialog_area);
}

/// Word-wrap to `max_width` characters. Words longer than a line are split.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                lines.push(word.drain(..max_width).collect());
            }

            if current_len > 0 && current_len + 1 + word.len() > max_width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        if current_len > 0 || paragraph.trim().is_empty() {
            lines.push(current);
        }
    }

    lines
}
