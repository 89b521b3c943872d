pub mod calendar_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod styles;
pub mod timer_pane;
pub mod today_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use calendar_pane::render_calendar_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_detail_modal, render_time_up_modal};
use ratatui::{text::Line, widgets::Paragraph, Frame};
use styles::error_style;
use timer_pane::render_timer_pane;
use today_pane::render_today_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, app.focus, layout.keybindings_area);

    render_today_pane(f, app, layout.today_area);
    render_timer_pane(f, app, layout.timer_area);
    render_calendar_pane(f, app, layout.calendar_area);

    if let Some(status) = &app.status {
        f.render_widget(
            Paragraph::new(Line::styled(format!(" {}", status), error_style())),
            layout.status_area,
        );
    }

    // Detail stays visible underneath an add form opened from it
    if app.selected_date.is_some() {
        render_detail_modal(f, app, size);
    }

    if app.ui_mode == UiMode::AddingTask {
        render_input_form(f, app, size);
    }

    // Time-up notice takes precedence
    render_time_up_modal(f, app, size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CompletionCounter;
    use crate::domain::Granularity;
    use crate::persistence::Storage;
    use crate::pomodoro::PomodoroTimer;
    use crate::store::TaskStore;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::{tempdir, TempDir};

    fn create_test_app() -> (TempDir, AppState) {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path()).unwrap();
        let app = AppState::new(
            TaskStore::load(storage.clone()),
            CompletionCounter::load(storage),
            PomodoroTimer::default(),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
        );
        (temp_dir, app)
    }

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_detail_modal() {
        let (_dir, mut app) = create_test_app();
        app.add_task(app.today, "Water plants", None).unwrap();
        app.select_date(Some(app.today));

        let screen = draw(&app, 100, 40);
        assert!(screen.contains("Tasks for Sunday, March 10, 2024"));
    }

    #[test]
    fn test_render_modals_on_short_terminal() {
        let (_dir, mut app) = create_test_app();
        app.select_date(Some(app.today));
        draw(&app, 80, 4);

        app.add_task(app.today, "Water plants", None).unwrap();
        draw(&app, 80, 4);

        app.start_add_task();
        draw(&app, 80, 4);

        app.time_up = true;
        draw(&app, 80, 4);
        draw(&app, 10, 2);
    }

    #[test]
    fn test_render_year_view_on_tiny_terminal() {
        let (_dir, mut app) = create_test_app();
        app.set_granularity(Granularity::Year);
        draw(&app, 10, 2);
    }
}
