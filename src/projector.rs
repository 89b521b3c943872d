//! Derived views of the task store.
//!
//! `ViewProjector` caches the three on-screen projections (today list,
//! calendar grid, date detail) and rebuilds the affected ones whenever the
//! store, the cursor or the selection changes. Rendering only reads the cache.

use crate::domain::{
    day_markers, grid_dates, month_name, CalendarCursor, CalendarView, DayCell, DetailView,
    Granularity, MiniCell, MiniMonth, TaskRow, TodayView,
};
use crate::store::TaskStore;
use chrono::{Datelike, NaiveDate};

/// Which projections need rebuilding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affected {
    pub today: bool,
    pub calendar: bool,
    pub detail: bool,
}

impl Affected {
    pub const ALL: Self = Self {
        today: true,
        calendar: true,
        detail: true,
    };
    pub const CALENDAR: Self = Self {
        today: false,
        calendar: true,
        detail: false,
    };
    pub const DETAIL: Self = Self {
        today: false,
        calendar: false,
        detail: true,
    };

    /// Views touched by a mutation of `date`'s tasks
    pub fn for_date(date: NaiveDate, today: NaiveDate, selected: Option<NaiveDate>) -> Self {
        Self {
            today: date == today,
            calendar: true,
            detail: selected == Some(date),
        }
    }
}

/// Everything a projection is derived from
#[derive(Debug, Clone, Copy)]
pub struct ProjectionInput<'a> {
    pub store: &'a TaskStore,
    pub cursor: &'a CalendarCursor,
    pub selected: Option<NaiveDate>,
    pub today: NaiveDate,
}

#[derive(Debug, Default)]
pub struct ViewProjector {
    pub today: TodayView,
    pub calendar: CalendarView,
    pub detail: DetailView,
}

impl ViewProjector {
    pub fn new(input: ProjectionInput<'_>) -> Self {
        let mut projector = Self::default();
        projector.recompute(input, Affected::ALL);
        projector
    }

    pub fn recompute(&mut self, input: ProjectionInput<'_>, affected: Affected) {
        if affected.today {
            self.today = project_today(input.store, input.today);
        }
        if affected.calendar {
            self.calendar = project_calendar(input.store, input.cursor, input.today);
        }
        if affected.detail {
            self.detail = project_detail(input.store, input.selected);
        }
    }
}

pub fn project_today(store: &TaskStore, today: NaiveDate) -> TodayView {
    let tasks = store.tasks_for(today);
    TodayView {
        date: Some(today),
        rows: tasks.iter().map(TaskRow::from).collect(),
        completed_count: store.completed_count(today),
    }
}

pub fn project_calendar(store: &TaskStore, cursor: &CalendarCursor, today: NaiveDate) -> CalendarView {
    match cursor.granularity {
        Granularity::Month => project_month(store, cursor.reference_date, today),
        Granularity::Year => project_year(store, cursor.reference_date, today),
    }
}

/// 42-cell grid for the month containing `reference`
pub fn project_month(store: &TaskStore, reference: NaiveDate, today: NaiveDate) -> CalendarView {
    let (year, month) = (reference.year(), reference.month());

    let cells = grid_dates(year, month)
        .into_iter()
        .map(|date| {
            let (markers, overflow) = day_markers(store.tasks_for(date));
            DayCell {
                date,
                in_month: date.month() == month && date.year() == year,
                is_today: date == today,
                is_highlighted: date == reference,
                markers,
                overflow,
            }
        })
        .collect();

    CalendarView::Month {
        title: format!("{} {}", month_name(month), year),
        cells,
    }
}

/// Twelve miniatures for the year containing `reference`
pub fn project_year(store: &TaskStore, reference: NaiveDate, today: NaiveDate) -> CalendarView {
    let year = reference.year();

    let months = (1..=12)
        .map(|month| {
            let cells = grid_dates(year, month)
                .into_iter()
                .map(|date| {
                    (date.month() == month).then(|| MiniCell {
                        day: date.day(),
                        has_tasks: store.has_tasks(date),
                        is_today: date == today,
                    })
                })
                .collect();
            MiniMonth {
                name: month_name(month),
                is_highlighted: month == reference.month(),
                cells,
            }
        })
        .collect();

    CalendarView::Year {
        title: year.to_string(),
        months,
    }
}

pub fn project_detail(store: &TaskStore, selected: Option<NaiveDate>) -> DetailView {
    let Some(date) = selected else {
        return DetailView::Closed;
    };

    let title = format!("Tasks for {}", date.format("%A, %B %-d, %Y"));
    let tasks = store.tasks_for(date);
    if tasks.is_empty() {
        DetailView::Empty { date, title }
    } else {
        DetailView::Tasks {
            date,
            title,
            rows: tasks.iter().map(TaskRow::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::GRID_CELLS;
    use crate::domain::views::Marker;
    use crate::persistence::Storage;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open_store() -> (TempDir, TaskStore) {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path()).unwrap();
        (temp_dir, TaskStore::load(storage))
    }

    fn month_cells(view: &CalendarView) -> &[DayCell] {
        match view {
            CalendarView::Month { cells, .. } => cells,
            CalendarView::Year { .. } => panic!("expected month view"),
        }
    }

    #[test]
    fn test_month_grid_geometry() {
        let (_dir, store) = open_store();
        let view = project_month(&store, date(2024, 3, 10), date(2024, 3, 15));

        assert_eq!(view.title(), "March 2024");
        let cells = month_cells(&view);
        assert_eq!(cells.len(), GRID_CELLS);
        assert_eq!(cells[0].date, date(2024, 2, 25));
        assert_eq!(cells[0].date.weekday(), Weekday::Sun);
        assert!(!cells[0].in_month);
        assert!(cells[5].in_month); // March 1st
        assert_eq!(cells.iter().filter(|c| c.in_month).count(), 31);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert!(cells.iter().find(|c| c.date == date(2024, 3, 10)).unwrap().is_highlighted);
    }

    #[test]
    fn test_month_cell_overflow() {
        let (_dir, mut store) = open_store();
        let d = date(2024, 3, 10);
        for i in 0..4 {
            store.add_task(d, &format!("Task {}", i), None).unwrap();
        }

        let view = project_month(&store, d, d);
        let cell = month_cells(&view).iter().find(|c| c.date == d).unwrap();
        assert_eq!(cell.markers.len(), 3);
        assert_eq!(cell.overflow_label().as_deref(), Some("+1"));
    }

    #[test]
    fn test_month_markers_keep_order_and_completion() {
        let (_dir, mut store) = open_store();
        let d = date(2024, 3, 10);
        store.add_task(d, "a", None).unwrap();
        let b = store.add_task(d, "b", None).unwrap().unwrap();
        store.toggle_completion(d, b).unwrap();

        let view = project_month(&store, d, d);
        let cell = month_cells(&view).iter().find(|c| c.date == d).unwrap();
        assert_eq!(
            cell.markers,
            vec![Marker { completed: false }, Marker { completed: true }]
        );
        assert_eq!(cell.overflow, 0);
    }

    #[test]
    fn test_year_view_blanks_and_has_tasks() {
        let (_dir, mut store) = open_store();
        store.add_task(date(2024, 2, 29), "Leap", None).unwrap();

        let view = project_year(&store, date(2024, 6, 1), date(2024, 6, 1));
        let CalendarView::Year { title, months } = view else {
            panic!("expected year view");
        };
        assert_eq!(title, "2024");
        assert_eq!(months.len(), 12);
        assert!(months[5].is_highlighted);

        let feb = &months[1];
        assert_eq!(feb.name, "February");
        assert_eq!(feb.cells.len(), GRID_CELLS);
        // Feb 1st 2024 is a Thursday: four leading blanks
        assert!(feb.cells[..4].iter().all(Option::is_none));
        assert_eq!(feb.cells.iter().flatten().count(), 29);
        let leap = feb.cells.iter().flatten().find(|c| c.day == 29).unwrap();
        assert!(leap.has_tasks);
        assert_eq!(feb.cells.iter().flatten().filter(|c| c.has_tasks).count(), 1);
    }

    #[test]
    fn test_today_view() {
        let (_dir, mut store) = open_store();
        let today = date(2024, 3, 10);
        let a = store.add_task(today, "a", Some("2024-03-10T16:45".to_string())).unwrap().unwrap();
        store.add_task(today, "b", Some("garbage".to_string())).unwrap();
        store.add_task(date(2024, 3, 11), "tomorrow", None).unwrap();
        store.toggle_completion(today, a).unwrap();

        let view = project_today(&store, today);
        assert_eq!(view.date, Some(today));
        assert_eq!(view.rows.len(), 2);
        assert_eq!(view.completed_count, 1);
        assert_eq!(view.rows[0].reminder.as_deref(), Some("16:45"));
        assert_eq!(view.rows[1].reminder, None);
    }

    #[test]
    fn test_detail_view_states() {
        let (_dir, mut store) = open_store();
        let d = date(2024, 3, 10);

        assert_eq!(project_detail(&store, None), DetailView::Closed);
        assert_eq!(project_detail(&store, None).date(), None);
        assert_eq!(project_detail(&store, Some(d)).date(), Some(d));

        match project_detail(&store, Some(d)) {
            DetailView::Empty { title, .. } => {
                assert_eq!(title, "Tasks for Sunday, March 10, 2024");
            }
            other => panic!("expected empty detail, got {:?}", other),
        }

        store.add_task(d, "Buy milk", None).unwrap();
        let detail = project_detail(&store, Some(d));
        assert_eq!(detail.rows().len(), 1);
        assert_eq!(detail.rows()[0].text, "Buy milk");
        assert_eq!(detail.date(), Some(d));
    }

    #[test]
    fn test_recompute_only_touches_affected_views() {
        let (_dir, mut store) = open_store();
        let today = date(2024, 3, 10);
        let cursor = CalendarCursor::new(today);
        let input = ProjectionInput {
            store: &store,
            cursor: &cursor,
            selected: None,
            today,
        };
        let mut projector = ViewProjector::new(input);
        assert!(projector.today.rows.is_empty());

        store.add_task(today, "x", None).unwrap();
        let input = ProjectionInput {
            store: &store,
            cursor: &cursor,
            selected: None,
            today,
        };
        projector.recompute(input, Affected::CALENDAR);
        assert!(projector.today.rows.is_empty());

        projector.recompute(input, Affected::for_date(today, today, None));
        assert_eq!(projector.today.rows.len(), 1);
    }

    #[test]
    fn test_affected_for_date() {
        let today = date(2024, 3, 10);
        let other = date(2024, 3, 12);
        assert_eq!(Affected::for_date(today, today, None), Affected { today: true, calendar: true, detail: false });
        assert_eq!(
            Affected::for_date(other, today, Some(other)),
            Affected { today: false, calendar: true, detail: true }
        );
    }
}
