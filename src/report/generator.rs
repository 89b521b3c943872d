use crate::domain::{completion_glyph, Task};
use crate::persistence::files::atomic_write;
use crate::report::stats::{calculate_day_stats, calculate_month_stats};
use crate::store::TaskStore;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Default report location inside the data directory
pub fn default_report_path(dir: &Path, date: NaiveDate) -> PathBuf {
    dir.join(format!("report-{}.md", date.format("%Y-%m-%d")))
}

/// Build the markdown report for `date`
pub fn build_report(store: &TaskStore, lifetime_completed: u64, date: NaiveDate) -> String {
    let tasks = store.tasks_for(date);
    let day = calculate_day_stats(tasks);
    let month = calculate_month_stats(store.mapping(), date);

    let mut report = String::new();

    // Header
    report.push_str(&format!("# Daily Report - {}\n\n", date.format("%A, %B %-d, %Y")));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!(
        "- **Tasks:** {} (Completed: {}, Pending: {})\n",
        day.total, day.completed, day.pending
    ));
    report.push_str(&format!(
        "- **Completion Rate:** {}\n",
        format_percent(day.completion_percent)
    ));
    report.push_str(&format!("- **With Reminder:** {}\n", day.with_reminder));
    report.push_str(&format!("- **Lifetime Completed:** {}\n\n", lifetime_completed));

    // Tasks Section
    report.push_str("## Tasks\n\n");
    if tasks.is_empty() {
        report.push_str("_No tasks for this date._\n\n");
    } else {
        for task in tasks {
            report.push_str(&task_entry(task));
        }
        report.push('\n');
    }

    // Month Section
    report.push_str(&format!("## {}\n\n", date.format("%B %Y")));
    report.push_str(&format!("- **Days With Tasks:** {}\n", month.active_days));
    report.push_str(&format!(
        "- **Tasks Completed:** {}/{}\n",
        month.completed, month.total
    ));

    report
}

/// One markdown list entry: "- [x] text (🕒 14:30)"
fn task_entry(task: &Task) -> String {
    match task.reminder_badge() {
        Some(time) => format!("- {} {} (🕒 {})\n", completion_glyph(task.completed), task.text, time),
        None => format!("- {} {}\n", completion_glyph(task.completed), task.text),
    }
}

/// Write the report for `date` and return where it landed
pub fn generate_report(
    store: &TaskStore,
    lifetime_completed: u64,
    date: NaiveDate,
    output_path: Option<PathBuf>,
    data_dir: &Path,
) -> Result<PathBuf> {
    let path = output_path.unwrap_or_else(|| default_report_path(data_dir, date));
    let report = build_report(store, lifetime_completed, date);
    atomic_write(&path, &report)?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
