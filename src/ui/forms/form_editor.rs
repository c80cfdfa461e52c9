//! Create form editor rendering
//!
//! The editor is a vertical stack of fields, one per [`EditorRow`]. When the
//! stack is taller than the screen it scrolls so the focused row stays
//! visible.

use super::field_renderer::{
    draw_checkbox_field, draw_field_with_value, draw_help_text, draw_selector_field,
};
use crate::app::App;
use crate::platform::{
    ADD_OPTION_SHORTCUT, ADD_QUESTION_SHORTCUT, REMOVE_OPTION_SHORTCUT, REMOVE_QUESTION_SHORTCUT,
    SAVE_SHORTCUT,
};
use crate::state::{
    DraftEditor, EditorButton, EditorRow, Form, DEFAULT_MAX_LABEL, DEFAULT_MAX_VALUE,
    DEFAULT_MIN_LABEL, DEFAULT_MIN_VALUE,
};
use crate::ui::components::{render_button_row, ButtonSpec, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;
const DESCRIPTION_HEIGHT: u16 = 5;

fn row_height(row: EditorRow) -> u16 {
    match row {
        EditorRow::Description => DESCRIPTION_HEIGHT,
        EditorRow::Buttons => BUTTON_HEIGHT,
        _ => FIELD_HEIGHT,
    }
}

/// First row to draw so that `active` fits in `height`
pub fn first_visible_row(rows: &[EditorRow], active: usize, height: u16) -> usize {
    let active = active.min(rows.len().saturating_sub(1));
    let mut first = 0;
    while first < active {
        let needed: u16 = rows[first..=active].iter().map(|r| row_height(*r)).sum();
        if needed <= height {
            break;
        }
        first += 1;
    }
    first
}

/// Draw the create form editor
pub fn draw_create_form(frame: &mut Frame, area: Rect, app: &App) {
    let editor = &app.state.editor;
    let question_count = editor.draft.questions.len();

    let block = Block::default()
        .title(format!(
            " Create Form ({} question{}) ",
            question_count,
            if question_count == 1 { "" } else { "s" }
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(2), // Help text
        ])
        .margin(1)
        .split(area);

    draw_rows(frame, chunks[0], editor);
    draw_help_text(frame, chunks[1], help_lines());
}

fn draw_rows(frame: &mut Frame, area: Rect, editor: &DraftEditor) {
    let rows = editor.rows();
    let active = editor.active_field();
    let first = first_visible_row(&rows, active, area.height);

    let mut y = area.y;
    let bottom = area.y + area.height;
    for (index, row) in rows.iter().enumerate().skip(first) {
        let height = row_height(*row);
        if y + height > bottom {
            break;
        }
        let row_area = Rect {
            x: area.x,
            y,
            width: area.width,
            height,
        };
        draw_row(frame, row_area, editor, *row, index == active);
        y += height;
    }
}

fn draw_row(frame: &mut Frame, area: Rect, editor: &DraftEditor, row: EditorRow, is_active: bool) {
    let text = editor.row_text(row).unwrap_or_default();
    let question = row.question_index().and_then(|q| editor.draft.question(q));

    match row {
        EditorRow::Title => {
            draw_field_with_value(frame, area, "Form title", &text, "(required)", is_active, false)
        }
        EditorRow::Description => {
            draw_field_with_value(frame, area, "Description", &text, "(empty)", is_active, true)
        }
        EditorRow::QuestionTitle(q) => {
            let marker = if question.is_some_and(|x| x.required) { " *" } else { "" };
            draw_field_with_value(
                frame,
                area,
                &format!("Question {}{marker}", q + 1),
                &text,
                "(required)",
                is_active,
                false,
            )
        }
        EditorRow::QuestionType(q) => {
            let label = question.map(|x| x.question_type.label()).unwrap_or_default();
            draw_selector_field(frame, area, &format!("Q{} type", q + 1), label, is_active)
        }
        EditorRow::Required(q) => {
            let checked = question.is_some_and(|x| x.required);
            let label = format!("Q{} required", q + 1);
            draw_checkbox_field(frame, area, &label, checked, is_active)
        }
        EditorRow::MinValue(_) => {
            let placeholder = format!("(default {DEFAULT_MIN_VALUE})");
            draw_field_with_value(frame, area, "Min value", &text, &placeholder, is_active, false)
        }
        EditorRow::MaxValue(_) => {
            let placeholder = format!("(default {DEFAULT_MAX_VALUE})");
            draw_field_with_value(frame, area, "Max value", &text, &placeholder, is_active, false)
        }
        EditorRow::MinLabel(_) => {
            let placeholder = format!("(default \"{DEFAULT_MIN_LABEL}\")");
            draw_field_with_value(frame, area, "Min label", &text, &placeholder, is_active, false)
        }
        EditorRow::MaxLabel(_) => {
            let placeholder = format!("(default \"{DEFAULT_MAX_LABEL}\")");
            draw_field_with_value(frame, area, "Max label", &text, &placeholder, is_active, false)
        }
        EditorRow::Option(_, o) => draw_field_with_value(
            frame,
            area,
            &format!("  Option {}", o + 1),
            &text,
            "(empty)",
            is_active,
            false,
        ),
        EditorRow::Buttons => {
            let buttons: Vec<ButtonSpec> = EditorButton::ALL
                .iter()
                .map(|b| ButtonSpec {
                    label: b.label(),
                    accent: button_accent(*b),
                })
                .collect();
            let focused = is_active
                .then(|| EditorButton::ALL.iter().position(|b| *b == editor.selected_button))
                .flatten();
            render_button_row(frame, area, &buttons, focused);
        }
    }
}

fn button_accent(button: EditorButton) -> Color {
    match button {
        EditorButton::Cancel => Color::Red,
        EditorButton::AddQuestion => Color::Cyan,
        EditorButton::Save => Color::Green,
    }
}

fn help_lines() -> Vec<Line<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let text = |t: &'static str| Span::raw(t);
    vec![
        Line::from(vec![
            key("Tab/↑↓"),
            text(" move  "),
            key("←→/Space"),
            text(" type  "),
            key("Space"),
            text(" required  "),
            key(SAVE_SHORTCUT),
            text(" submit  "),
            key("Esc"),
            text(" cancel"),
        ]),
        Line::from(vec![
            key(ADD_QUESTION_SHORTCUT),
            text(" add question  "),
            key(REMOVE_QUESTION_SHORTCUT),
            text(" remove question  "),
            key(ADD_OPTION_SHORTCUT),
            text(" add option  "),
            key(REMOVE_OPTION_SHORTCUT),
            text(" remove option"),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_visible_row_when_everything_fits() {
        let rows = vec![EditorRow::Title, EditorRow::Description, EditorRow::Buttons];
        assert_eq!(first_visible_row(&rows, 2, 40), 0);
    }

    #[test]
    fn test_first_visible_row_scrolls_to_active() {
        let rows = vec![
            EditorRow::Title,
            EditorRow::Description,
            EditorRow::QuestionTitle(0),
            EditorRow::QuestionType(0),
            EditorRow::Required(0),
            EditorRow::Buttons,
        ];
        // Required(0) needs itself plus rows above it that fit in 9 lines
        assert_eq!(first_visible_row(&rows, 4, 9), 2);
    }

    #[test]
    fn test_first_visible_row_on_tiny_area() {
        let rows = vec![EditorRow::Title, EditorRow::Description];
        assert_eq!(first_visible_row(&rows, 1, 1), 1);
    }
}
