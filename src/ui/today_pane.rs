use crate::app::AppState;
use crate::domain::{completion_glyph, Focus, TaskRow};
use crate::ui::styles::{
    border_style, default_style, done_style, reminder_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the "Today" task list pane
pub fn render_today_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let view = &app.views.today;
    let focused = app.focus == Focus::Today;

    let date = view.date.unwrap_or(app.today).format("%a %b %d");
    let title = format!(
        " Today ({}) · {}/{} done ",
        date,
        view.completed_count,
        view.rows.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(Span::styled(title, title_style()));

    if view.rows.is_empty() {
        let empty = Paragraph::new(Line::styled(
            " Nothing planned. Press a to add a task.",
            default_style(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let style = if focused && idx == app.today_index {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(task_line(row)).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

/// Format: [x] Write proposal  🕒 14:30
pub fn task_line(row: &TaskRow) -> Line<'static> {
    let mut spans = vec![Span::raw(format!("{} ", completion_glyph(row.completed)))];

    if row.completed {
        spans.push(Span::styled(row.text.clone(), done_style()));
    } else {
        spans.push(Span::raw(row.text.clone()));
    }

    if let Some(reminder) = &row.reminder {
        spans.push(Span::styled(format!("  🕒 {}", reminder), reminder_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskId;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_task_line_with_reminder() {
        let row = TaskRow {
            id: TaskId::new(),
            text: "Dentist".to_string(),
            completed: false,
            reminder: Some("14:30".to_string()),
        };
        assert_eq!(line_text(&task_line(&row)), "[ ] Dentist  🕒 14:30");
    }

    #[test]
    fn test_task_line_completed() {
        let row = TaskRow {
            id: TaskId::new(),
            text: "Read".to_string(),
            completed: true,
            reminder: None,
        };
        assert_eq!(line_text(&task_line(&row)), "[x] Read");
    }
}
