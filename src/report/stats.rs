use crate::domain::Task;
use crate::store::TaskMap;
use chrono::{Datelike, NaiveDate};

/// Statistics for a single date
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub with_reminder: usize,
    pub completion_percent: f64,
}

/// Statistics across the month containing the report date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthStats {
    pub active_days: usize,
    pub total: usize,
    pub completed: usize,
}

pub fn calculate_day_stats(tasks: &[Task]) -> DayStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let with_reminder = tasks.iter().filter(|t| t.reminder().is_some()).count();

    let completion_percent = if total > 0 {
        (completed as f64 / total as f64) * 100.0
    } else {
        0.0
    };

    DayStats {
        total,
        completed,
        pending: total - completed,
        with_reminder,
        completion_percent,
    }
}

pub fn calculate_month_stats(mapping: &TaskMap, date: NaiveDate) -> MonthStats {
    mapping
        .iter()
        .filter(|(day, _)| day.year() == date.year() && day.month() == date.month())
        .fold(MonthStats::default(), |mut stats, (_, tasks)| {
            stats.active_days += 1;
            stats.total += tasks.len();
            stats.completed += tasks.iter().filter(|t| t.completed).count();
            stats
        })
}
