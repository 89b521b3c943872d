pub mod calendar;
pub mod enums;
pub mod task;
pub mod views;

pub use calendar::{grid_dates, month_name, CalendarCursor, MINI_MONTH_COLUMNS};
pub use enums::{Focus, Granularity, TimerPhase, UiMode};
pub use task::{date_key, reminder_for, Task, TaskId, DATE_KEY_FORMAT};
pub use views::{
    completion_glyph, day_markers, CalendarView, DayCell, DetailView, MiniCell, MiniMonth,
    TaskRow, TodayView, EMPTY_DETAIL_MESSAGE,
};
