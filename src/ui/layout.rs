use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the pomodoro pane, borders included
const TIMER_PANE_HEIGHT: u16 = 9;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub today_area: Rect,
    pub timer_area: Rect,
    pub calendar_area: Rect,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: Today list above the timer (40%) | Calendar (60%)
/// - Bottom bar: status message (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(TIMER_PANE_HEIGHT)])
        .split(horizontal[0]);

    MainLayout {
        keybindings_area: main_chunks[0],
        today_area: left[0],
        timer_area: left[1],
        calendar_area: horizontal[1],
        status_area: main_chunks[2],
    }
}

/// Create a centered modal area with a fixed height, cut down to fit `area`
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.timer_area.height, TIMER_PANE_HEIGHT);
        assert!(layout.today_area.height > 0);
        assert!(layout.calendar_area.width > layout.today_area.width);
        assert_eq!(layout.today_area.x, layout.timer_area.x);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 16);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 16);
    }

    #[test]
    fn test_create_modal_area_short_terminal() {
        let area = Rect::new(0, 0, 80, 4);
        let modal = create_modal_area(area, 11);

        assert_eq!(modal.height, 4);
        assert_eq!(modal.y, 0);
    }
}
