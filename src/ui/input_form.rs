use crate::app::AppState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// One labelled form field with a cursor when it is being edited
fn field_lines<'a>(label: &'a str, value: &'a str, editing: bool) -> [Line<'a>; 2] {
    let label = if editing {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };

    let value = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);

    [label, value]
}

/// Render the input form for adding a task
pub fn render_input_form(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(form) = &app.input_form {
        let modal_area = create_modal_area(area, 11);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let title = format!(" Add Task · {} ", form.date.format("%a %b %-d"));

        let mut lines = vec![Line::raw("")];
        lines.extend(field_lines("Task:", &form.text, form.editing_field == 0));
        lines.push(Line::raw(""));
        lines.extend(field_lines(
            "Reminder (HH:MM, optional):",
            &form.time,
            form.editing_field == 1,
        ));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}
