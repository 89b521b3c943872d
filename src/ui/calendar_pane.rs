use crate::app::AppState;
use crate::domain::{CalendarView, DayCell, Focus, MiniMonth, MINI_MONTH_COLUMNS};
use crate::ui::styles::{
    border_style, default_style, marker_done_style, marker_style, outside_month_style,
    selected_style, title_style, today_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];
const MARKER_GLYPH: &str = "•";

/// Render the calendar pane for whichever granularity is active
pub fn render_calendar_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let focused = app.focus == Focus::Calendar;
    let view = &app.views.calendar;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused))
        .title(Span::styled(format!(" {} ", view.title()), title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    match view {
        CalendarView::Month { cells, .. } => {
            let cell_width = (inner.width / 7).max(3) as usize;
            let lines = month_lines(cells, cell_width, focused);
            f.render_widget(Paragraph::new(lines), inner);
        }
        CalendarView::Year { months, .. } => render_year(f, months, inner, focused),
    }
}

/// Weekday header plus one line per grid week
pub fn month_lines(cells: &[DayCell], cell_width: usize, focused: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let header: Vec<Span> = WEEKDAY_HEADER
        .iter()
        .map(|d| Span::styled(format!("{:<width$}", d, width = cell_width), title_style()))
        .collect();
    lines.push(Line::from(header));

    for week in cells.chunks(7) {
        let mut spans = Vec::new();
        for cell in week {
            spans.extend(day_spans(cell, cell_width, focused));
        }
        lines.push(Line::from(spans));
        lines.push(Line::raw(""));
    }

    lines
}

/// Day number, task markers and "+N" overflow, padded to the cell width
fn day_spans(cell: &DayCell, cell_width: usize, focused: bool) -> Vec<Span<'static>> {
    use chrono::Datelike;

    let number_style = if cell.is_highlighted && focused {
        selected_style()
    } else if cell.is_today {
        today_style()
    } else if !cell.in_month {
        outside_month_style()
    } else {
        default_style()
    };

    let number = format!("{:>2}", cell.date.day());
    let mut used = number.chars().count() + 1;
    let mut spans = vec![Span::styled(number, number_style), Span::raw(" ")];

    for marker in &cell.markers {
        let style = if marker.completed {
            marker_done_style()
        } else {
            marker_style()
        };
        spans.push(Span::styled(MARKER_GLYPH, style));
        used += 1;
    }
    if let Some(label) = cell.overflow_label() {
        used += label.chars().count();
        spans.push(Span::styled(label, marker_style()));
    }

    spans.push(Span::raw(" ".repeat(cell_width.saturating_sub(used))));
    spans
}

fn render_year(f: &mut Frame, months: &[MiniMonth], area: Rect, focused: bool) {
    let rows = months.len().div_ceil(MINI_MONTH_COLUMNS).max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    for (row_idx, chunk) in months.chunks(MINI_MONTH_COLUMNS).enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, MINI_MONTH_COLUMNS as u32);
                MINI_MONTH_COLUMNS
            ])
            .split(row_areas[row_idx]);

        for (col_idx, mini) in chunk.iter().enumerate() {
            let highlighted = mini.is_highlighted && focused;
            let name_style = if highlighted {
                selected_style()
            } else {
                title_style()
            };
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(highlighted))
                .title(Span::styled(format!(" {} ", mini.name), name_style));
            let paragraph = Paragraph::new(mini_month_lines(mini)).block(block);
            f.render_widget(paragraph, col_areas[col_idx]);
        }
    }
}

/// Compact grid: two-letter header, days with tasks coloured
pub fn mini_month_lines(mini: &MiniMonth) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(
        WEEKDAY_HEADER
            .iter()
            .map(|d| Span::styled(format!("{} ", d), outside_month_style()))
            .collect::<Vec<_>>(),
    )];

    for week in mini.cells.chunks(7) {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| match cell {
                None => Span::raw("   "),
                Some(day) => {
                    let style = if day.is_today {
                        today_style()
                    } else if day.has_tasks {
                        marker_style()
                    } else {
                        Style::default()
                    };
                    Span::styled(format!("{:>2} ", day.day), style)
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines
}
