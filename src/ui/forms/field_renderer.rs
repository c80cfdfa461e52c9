//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn field_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool) -> Block<'static> {
    Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(field_style(is_active))
}

/// Draw a bordered text field. Inactive empty fields show `placeholder`.
pub fn draw_field_with_value(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let cursor = Span::styled(if is_active { CURSOR } else { "" }, field_style(true));

    let content = if value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if is_multiline {
        let mut lines: Vec<Line> = value.split('\n').map(|l| Line::from(l.to_string())).collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default()
        };
        Paragraph::new(Line::from(vec![
            Span::styled(value.to_string(), style),
            cursor,
        ]))
    };

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .block(field_block(label, is_active)),
        area,
    );
}

/// Border for toggle-style controls, which focus in yellow
fn control_block(label: Option<&str>, focused: bool) -> Block<'static> {
    let block = Block::default().borders(Borders::ALL).border_style(if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    });
    match label {
        Some(label) => block.title(format!(" {label} ")),
        None => block,
    }
}

/// Draw a checkbox field
pub fn draw_checkbox_field(frame: &mut Frame, area: Rect, label: &str, checked: bool, focused: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = Style::default().fg(if focused { Color::Yellow } else { Color::White });

    frame.render_widget(
        Paragraph::new(format!("{mark} {label}"))
            .style(style)
            .block(control_block(None, focused)),
        area,
    );
}

/// Draw a "◀ value ▶" selector; arrows only show while focused
pub fn draw_selector_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let arrow = Style::default().fg(Color::Yellow);
    let line = if focused {
        Line::from(vec![
            Span::styled("◀ ", arrow),
            Span::styled(value.to_string(), Style::default().fg(Color::White)),
            Span::styled(" ▶", arrow),
        ])
    } else {
        Line::from(value.to_string())
    };

    frame.render_widget(
        Paragraph::new(line).block(control_block(Some(label), focused)),
        area,
    );
}

/// Draw help text lines
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
