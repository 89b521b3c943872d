use crate::app::AppState;
use crate::domain::{DetailView, EMPTY_DETAIL_MESSAGE};
use crate::pomodoro::TIME_UP_MESSAGE;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, selected_style},
    today_pane::task_line,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Block, Borders, Clear, List, ListItem, Paragraph, Wrap,
    },
    Frame,
};

/// Render the detail modal for the selected date
pub fn render_detail_modal(f: &mut Frame, app: &AppState, area: Rect) {
    let (title, rows) = match &app.views.detail {
        DetailView::Closed => return,
        DetailView::Empty { title, .. } => (title, None),
        DetailView::Tasks { title, rows, .. } => (title, Some(rows)),
    };

    let height = rows
        .map_or(5, |r| u16::try_from(r.len()).unwrap_or(u16::MAX).saturating_add(4))
        .max(5);
    let modal_area = create_modal_area(area, height);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", title), modal_title_style()))
        .title(
            Title::from(" [a] add  [Space] toggle  [x] delete  [Esc] close ")
                .position(Position::Bottom),
        )
        .style(modal_bg_style());

    match rows {
        None => {
            let lines = vec![
                Line::raw(""),
                Line::raw(format!("  {}", EMPTY_DETAIL_MESSAGE)),
            ];
            let paragraph = Paragraph::new(lines).block(block);
            f.render_widget(paragraph, modal_area);
        }
        Some(rows) => {
            let items: Vec<ListItem> = rows
                .iter()
                .enumerate()
                .map(|(idx, row)| {
                    let item = ListItem::new(task_line(row));
                    if idx == app.detail_index {
                        item.style(selected_style())
                    } else {
                        item
                    }
                })
                .collect();
            f.render_widget(List::new(items).block(block), modal_area);
        }
    }
}

/// Render the end-of-session notice
pub fn render_time_up_modal(f: &mut Frame, app: &AppState, area: Rect) {
    if !app.time_up {
        return;
    }

    let modal_area = create_modal_area(area, 7);
    f.render_widget(Clear, modal_area);

    let lines = vec![
        Line::raw(""),
        Line::raw(format!("  {}", TIME_UP_MESSAGE)),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [any key]", modal_title_style()),
            Span::raw(" Dismiss"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" ⏰ Pomodoro ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
