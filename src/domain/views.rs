use super::task::{Task, TaskId};
use chrono::NaiveDate;

/// Maximum number of task markers drawn in a month cell
pub const MAX_MARKERS: usize = 3;

/// Placeholder shown when a detail view has nothing to list
pub const EMPTY_DETAIL_MESSAGE: &str = "No tasks for this date";

/// A task row as rendered in the today list or the detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// Time-of-day badge, absent when there is no usable reminder
    pub reminder: Option<String>,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            text: task.text.clone(),
            completed: task.completed,
            reminder: task.reminder_badge(),
        }
    }
}

/// Today's list plus the daily stat shown under it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodayView {
    pub date: Option<NaiveDate>,
    pub rows: Vec<TaskRow>,
    pub completed_count: usize,
}

/// One dot in a month cell; `completed` selects the dimmed variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub completed: bool,
}

/// A day in the month grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_month: bool,
    pub is_today: bool,
    pub is_highlighted: bool,
    pub markers: Vec<Marker>,
    /// Tasks beyond the drawn markers, rendered as "+N"
    pub overflow: usize,
}

impl DayCell {
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{}", self.overflow))
    }
}

/// A day in a year-view miniature. Cells outside the miniature's month are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniCell {
    pub day: u32,
    pub has_tasks: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniMonth {
    pub name: &'static str,
    pub is_highlighted: bool,
    pub cells: Vec<Option<MiniCell>>,
}

/// The calendar projection for the active granularity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarView {
    Month { title: String, cells: Vec<DayCell> },
    Year { title: String, months: Vec<MiniMonth> },
}

impl CalendarView {
    pub fn title(&self) -> &str {
        match self {
            Self::Month { title, .. } | Self::Year { title, .. } => title,
        }
    }
}

impl Default for CalendarView {
    fn default() -> Self {
        Self::Month {
            title: String::new(),
            cells: Vec::new(),
        }
    }
}

/// Contents of the per-date detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    Closed,
    Empty { date: NaiveDate, title: String },
    Tasks { date: NaiveDate, title: String, rows: Vec<TaskRow> },
}

impl Default for DetailView {
    fn default() -> Self {
        Self::Closed
    }
}

impl DetailView {
    /// The date the modal is showing, `None` when closed
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Closed => None,
            Self::Empty { date, .. } | Self::Tasks { date, .. } => Some(*date),
        }
    }

    pub fn rows(&self) -> &[TaskRow] {
        match self {
            Self::Tasks { rows, .. } => rows,
            _ => &[],
        }
    }
}

/// Markers and overflow count for one day's tasks
pub fn day_markers(tasks: &[Task]) -> (Vec<Marker>, usize) {
    let markers = tasks
        .iter()
        .take(MAX_MARKERS)
        .map(|task| Marker {
            completed: task.completed,
        })
        .collect();
    (markers, tasks.len().saturating_sub(MAX_MARKERS))
}

/// Checkbox glyph for a row
pub fn completion_glyph(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}
