use crate::domain::{Focus, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hints for the current mode and focus
pub fn hints(mode: UiMode, focus: Focus) -> &'static str {
    match (mode, focus) {
        (UiMode::AddingTask, _) => " Tab text/time   Enter save   Esc cancel",
        (UiMode::DateDetail, _) => {
            " ↑/↓ select   Space toggle   x delete   a add   Esc close   s/p/r timer   q quit"
        }
        (UiMode::Normal, Focus::Today) => {
            " Tab calendar   ↑/↓ select   Space toggle   x delete   a add   s/p/r timer   z reset count   q quit"
        }
        (UiMode::Normal, Focus::Calendar) => {
            " Tab today   arrows move   [ / ] prev/next   m month   y year   Enter open   s/p/r timer   q quit"
        }
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, focus: Focus, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(mode, focus))).style(hint_style());
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_follow_focus() {
        assert!(hints(UiMode::Normal, Focus::Calendar).contains("m month"));
        assert!(hints(UiMode::Normal, Focus::Today).contains("Space toggle"));
        assert!(hints(UiMode::AddingTask, Focus::Calendar).contains("Esc cancel"));
    }
}
