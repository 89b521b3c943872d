use crate::app::AppState;
use crate::domain::TimerPhase;
use crate::ui::styles::{
    border_style, default_style, gauge_style, idle_style, paused_style, running_style,
    title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn phase_style(phase: TimerPhase) -> Style {
    match phase {
        TimerPhase::Running => running_style(),
        TimerPhase::Paused => paused_style(),
        TimerPhase::Idle => idle_style(),
    }
}

/// Render the pomodoro clock with the completion stats under it
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(false))
        .title(Span::styled(" 🍅 Pomodoro ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Clock and phase
            Constraint::Length(1), // Progress
            Constraint::Min(0),    // Stats
        ])
        .split(inner);

    let phase = app.timer.phase();
    let clock = Paragraph::new(vec![Line::from(vec![
        Span::styled(format!(" {} ", app.timer.display()), title_style()),
        Span::styled(format!("({})", phase.label()), phase_style(phase)),
    ])]);
    f.render_widget(clock, chunks[0]);

    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(elapsed_ratio(
            app.timer.remaining_seconds(),
            app.timer.duration_seconds(),
        ))
        .label("");
    f.render_widget(gauge, chunks[1]);

    let stats = Paragraph::new(stat_lines(
        app.views.today.completed_count,
        app.views.today.rows.len(),
        app.counter.value(),
    ))
    .style(default_style());
    f.render_widget(stats, chunks[2]);
}

/// Fraction of the session already elapsed, 0.0..=1.0
fn elapsed_ratio(remaining: u32, duration: u32) -> f64 {
    if duration == 0 {
        return 0.0;
    }
    let elapsed = duration.saturating_sub(remaining);
    f64::from(elapsed) / f64::from(duration)
}

/// Daily completion and the lifetime counter
pub fn stat_lines(completed_today: usize, total_today: usize, lifetime: u64) -> Vec<Line<'static>> {
    vec![
        Line::raw(format!(" Completed today: {}/{}", completed_today, total_today)),
        Line::raw(format!(" Total completed: {}", lifetime)),
    ]
}
