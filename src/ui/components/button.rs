//! Bordered buttons laid out in a row

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a button row: two borders around one line of text
pub const BUTTON_HEIGHT: u16 = 3;

/// A button label and the colour it takes when focused
#[derive(Debug, Clone, Copy)]
pub struct ButtonSpec<'a> {
    pub label: &'a str,
    pub accent: Color,
}

fn render_button(frame: &mut Frame, area: Rect, button: ButtonSpec, focused: bool) {
    let (border, text) = if focused {
        (
            Style::default().fg(button.accent),
            Style::default()
                .fg(button.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        )
    } else {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::Gray))
    };

    let widget = Paragraph::new(button.label)
        .alignment(Alignment::Center)
        .style(text)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(widget, area);
}

/// Split `area` evenly between `buttons`, highlighting `focused` if any
pub fn render_button_row(
    frame: &mut Frame,
    area: Rect,
    buttons: &[ButtonSpec],
    focused: Option<usize>,
) {
    if buttons.is_empty() {
        return;
    }
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, buttons.len() as u32); buttons.len()])
        .split(area);

    for (idx, (button, cell)) in buttons.iter().zip(cells.iter()).enumerate() {
        render_button(frame, *cell, *button, focused == Some(idx));
    }
}
