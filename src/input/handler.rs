use crate::app::AppState;
use crate::domain::{Focus, Granularity, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // The time-up notice swallows the first key
    if app.time_up {
        app.dismiss_time_up();
        return Ok(false);
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    app.status = None;

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::DateDetail => handle_detail_mode(app, key),
        UiMode::AddingTask => handle_input_form_mode(app, key),
    }
}

/// Keys shared by every non-form mode
fn handle_global(app: &mut AppState, key: KeyEvent) -> Result<Option<bool>> {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('S') => app.start_timer(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.pause_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char('z') | KeyCode::Char('Z') => app.reset_counter()?,
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(Some(true)),
        _ => return Ok(None),
    }
    Ok(Some(false))
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(quit) = handle_global(app, key)? {
        return Ok(quit);
    }

    if key.code == KeyCode::Tab {
        app.toggle_focus();
        return Ok(false);
    }

    match app.focus {
        Focus::Today => handle_today_keys(app, key)?,
        Focus::Calendar => handle_calendar_keys(app, key),
    }
    Ok(false)
}

fn handle_today_keys(app: &mut AppState, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_today()?,
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected_today()?,
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        _ => {}
    }
    Ok(())
}

fn handle_calendar_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.move_highlight(-1, 0),
        KeyCode::Right => app.move_highlight(1, 0),
        KeyCode::Up => app.move_highlight(0, -1),
        KeyCode::Down => app.move_highlight(0, 1),
        KeyCode::Char('[') => app.advance_cursor(-1),
        KeyCode::Char(']') => app.advance_cursor(1),
        KeyCode::Char('m') | KeyCode::Char('M') => app.set_granularity(Granularity::Month),
        KeyCode::Char('y') | KeyCode::Char('Y') => app.set_granularity(Granularity::Year),
        KeyCode::Enter => app.open_highlighted(),
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        _ => {}
    }
}

/// Handle keys while the date detail modal is open
fn handle_detail_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if let Some(quit) = handle_global(app, key)? {
        return Ok(quit);
    }

    match key.code {
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_selected_detail()?,
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => app.delete_selected_detail()?,
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_task(),
        KeyCode::Esc => app.select_date(None),
        _ => {}
    }
    Ok(false)
}

/// Handle keys in input form mode
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_input_form()?,
        KeyCode::Esc => app.cancel_input_form(),
        // Switch between text and reminder time
        KeyCode::Tab => app.input_form_toggle_field(),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}
