//! Form detail view

use crate::app::App;
use crate::api::FormRecord;
use crate::state::{QuestionPayload, QuestionType};
use chrono::Local;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw form detail view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.selected_form.as_ref() else {
        let message = Paragraph::new("Form not found")
            .style(Style::default().fg(Color::Red))
            .block(Block::default().title(" Form ").borders(Borders::ALL));
        frame.render_widget(message, area);
        return;
    };

    let content = detail_lines(form);
    let offset = app.state.scroll_offset.min(content.len().saturating_sub(1));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" {} ", form.summary.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));

    frame.render_widget(paragraph, area);
}

/// Lines the detail view scrolls through, before wrapping
pub fn line_count(form: &FormRecord) -> usize {
    detail_lines(form).len()
}

fn detail_lines(form: &FormRecord) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let summary = &form.summary;
    let created = summary
        .created_at
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut content = vec![
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::styled(summary.id.to_string(), Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![Span::styled("Created: ", label), Span::raw(created)]),
        Line::from(""),
    ];

    if !summary.description_or_empty().is_empty() {
        content.extend(
            summary
                .description_or_empty()
                .lines()
                .map(|l| Line::from(l.to_string())),
        );
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled("─".repeat(40), label)));
    content.push(Line::from(Span::styled(
        format!("Questions ({})", form.questions.len()),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));

    for (idx, question) in form.questions.iter().enumerate() {
        content.push(Line::from(""));
        content.extend(question_lines(idx, question));
    }

    content
}

fn question_lines(idx: usize, question: &QuestionPayload) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut title = vec![Span::styled(
        format!("{}. {}", idx + 1, question.title),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if question.required {
        title.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }

    let mut lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!("   {}", question.question_type.label()),
            dim,
        )),
    ];

    if question.question_type.is_scale() {
        let bound = |value: Option<i64>, label: &Option<String>| match (value, label) {
            (Some(v), Some(l)) => format!("{v} ({l})"),
            (Some(v), None) => v.to_string(),
            (None, _) => "?".to_string(),
        };
        lines.push(Line::from(format!(
            "   {} … {}",
            bound(question.min_value, &question.min_label),
            bound(question.max_value, &question.max_label)
        )));
    } else if question.question_type.is_choice() {
        let bullet = if question.question_type == QuestionType::MultiChoice {
            "☐"
        } else {
            "○"
        };
        for option in question.options.iter().flatten() {
            lines.push(Line::from(format!("   {bullet} {}", option.value)));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OptionPayload;

    fn question(question_type: QuestionType) -> QuestionPayload {
        QuestionPayload {
            id: "q".to_string(),
            title: "Rate us".to_string(),
            question_type,
            required: true,
            options: None,
            min_value: None,
            max_value: None,
            min_label: None,
            max_label: None,
        }
    }

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_scale_question_lines() {
        let mut q = question(QuestionType::LinearScale);
        q.min_value = Some(1);
        q.max_value = Some(10);
        q.min_label = Some("Bad".to_string());
        q.max_label = Some("Great".to_string());

        let lines = question_lines(0, &q);
        assert_eq!(text_of(&lines[0]), "1. Rate us *");
        assert_eq!(text_of(&lines[1]), "   Linear scale");
        assert_eq!(text_of(&lines[2]), "   1 (Bad) … 10 (Great)");
    }

    #[test]
    fn test_choice_question_lists_options() {
        let mut q = question(QuestionType::MultiChoice);
        q.required = false;
        q.options = Some(vec![
            OptionPayload {
                id: "a".to_string(),
                value: "Red".to_string(),
            },
            OptionPayload {
                id: "b".to_string(),
                value: "Blue".to_string(),
            },
        ]);

        let lines = question_lines(2, &q);
        assert_eq!(text_of(&lines[0]), "3. Rate us");
        assert_eq!(lines.len(), 4);
        assert_eq!(text_of(&lines[3]), "   ☐ Blue");
    }

    #[test]
    fn test_text_question_has_no_extra_lines() {
        let lines = question_lines(0, &question(QuestionType::Text));
        assert_eq!(lines.len(), 2);
    }
}
