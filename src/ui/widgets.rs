//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a scrollable list that automatically keeps the selected item visible.
///
/// # Example
/// ```ignore
/// let list = List::new(items).block(block);
/// render_scrollable_list(frame, area, list, app.state.selected_index);
/// ```
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, selected_index: usize) {
    let mut list_state = ListState::default().with_selected(Some(selected_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Truncate to `max_chars` characters, ending with "..." when cut
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Rect of the given size centered in `area`, clipped to it
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("Survey", 10), "Survey");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_str("Customer feedback", 10), "Custome...");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_str("ÉÉÉÉÉÉ", 5), "ÉÉ...");
    }

    #[test]
    fn test_centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(area, 20, 4), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(area, 80, 20), area);
    }
}
