use crate::counter::CompletionCounter;
use crate::domain::{
    reminder_for, CalendarCursor, Focus, Granularity, TaskId, UiMode, MINI_MONTH_COLUMNS,
};
use crate::error::parse_time;
use crate::notifications;
use crate::pomodoro::{PomodoroTimer, TimerEvent, TIME_UP_MESSAGE};
use crate::projector::{Affected, ProjectionInput, ViewProjector};
use crate::store::TaskStore;
use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use std::time::Instant;

/// Input form state for adding a task to a date
#[derive(Debug, Clone)]
pub struct InputFormState {
    pub date: NaiveDate,
    pub text: String,
    pub time: String,         // Optional HH:MM reminder
    pub editing_field: usize, // 0 = text, 1 = time
    pub return_mode: UiMode,
}

/// Main application state for one session.
///
/// Every user action is a method here. Mutations go through the task store
/// (which persists before returning) and then rebuild the affected views.
pub struct AppState {
    pub store: TaskStore,
    pub counter: CompletionCounter,
    pub timer: PomodoroTimer,
    pub cursor: CalendarCursor,
    pub selected_date: Option<NaiveDate>,
    pub today: NaiveDate,
    pub views: ViewProjector,
    pub focus: Focus,
    pub ui_mode: UiMode,
    pub today_index: usize,
    pub detail_index: usize,
    pub input_form: Option<InputFormState>,
    pub time_up: bool, // Pomodoro finished, waiting for acknowledgement
    pub status: Option<String>,
}

impl AppState {
    pub fn new(store: TaskStore, counter: CompletionCounter, timer: PomodoroTimer, today: NaiveDate) -> Self {
        let cursor = CalendarCursor::new(today);
        let views = ViewProjector::new(ProjectionInput {
            store: &store,
            cursor: &cursor,
            selected: None,
            today,
        });

        Self {
            store,
            counter,
            timer,
            cursor,
            selected_date: None,
            today,
            views,
            focus: Focus::Today,
            ui_mode: UiMode::Normal,
            today_index: 0,
            detail_index: 0,
            input_form: None,
            time_up: false,
            status: None,
        }
    }

    /// Rebuild projections and keep row selections in range
    fn refresh(&mut self, affected: Affected) {
        let input = ProjectionInput {
            store: &self.store,
            cursor: &self.cursor,
            selected: self.selected_date,
            today: self.today,
        };
        self.views.recompute(input, affected);

        let today_len = self.views.today.rows.len();
        if self.today_index >= today_len {
            self.today_index = today_len.saturating_sub(1);
        }
        let detail_len = self.views.detail.rows().len();
        if self.detail_index >= detail_len {
            self.detail_index = detail_len.saturating_sub(1);
        }
    }

    fn affected_by(&self, date: NaiveDate) -> Affected {
        Affected::for_date(date, self.today, self.selected_date)
    }

    // ---- task mutations ----

    pub fn add_task(&mut self, date: NaiveDate, text: &str, reminder_time: Option<String>) -> Result<Option<TaskId>> {
        let id = self.store.add_task(date, text, reminder_time)?;
        if id.is_some() {
            self.refresh(self.affected_by(date));
        }
        Ok(id)
    }

    /// Flip completion; the lifetime counter sees every transition
    pub fn toggle_task(&mut self, date: NaiveDate, id: TaskId) -> Result<()> {
        if let Some(toggle) = self.store.toggle_completion(date, id)? {
            self.counter
                .record_completion(toggle.was_completed, toggle.is_completed)?;
            self.refresh(self.affected_by(date));
        }
        Ok(())
    }

    pub fn delete_task(&mut self, date: NaiveDate, id: TaskId) -> Result<()> {
        if self.store.delete_task(date, id)? {
            self.refresh(self.affected_by(date));
        }
        Ok(())
    }

    fn selected_today_id(&self) -> Option<TaskId> {
        self.views.today.rows.get(self.today_index).map(|row| row.id)
    }

    fn selected_detail(&self) -> Option<(NaiveDate, TaskId)> {
        let date = self.views.detail.date()?;
        let row = self.views.detail.rows().get(self.detail_index)?;
        Some((date, row.id))
    }

    pub fn toggle_selected_today(&mut self) -> Result<()> {
        match self.selected_today_id() {
            Some(id) => self.toggle_task(self.today, id),
            None => Ok(()),
        }
    }

    pub fn delete_selected_today(&mut self) -> Result<()> {
        match self.selected_today_id() {
            Some(id) => self.delete_task(self.today, id),
            None => Ok(()),
        }
    }

    pub fn toggle_selected_detail(&mut self) -> Result<()> {
        match self.selected_detail() {
            Some((date, id)) => self.toggle_task(date, id),
            None => Ok(()),
        }
    }

    pub fn delete_selected_detail(&mut self) -> Result<()> {
        match self.selected_detail() {
            Some((date, id)) => self.delete_task(date, id),
            None => Ok(()),
        }
    }

    // ---- row selection ----

    pub fn move_selection_up(&mut self) {
        let index = match self.ui_mode {
            UiMode::DateDetail => &mut self.detail_index,
            _ => &mut self.today_index,
        };
        *index = index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let (index, len) = match self.ui_mode {
            UiMode::DateDetail => (&mut self.detail_index, self.views.detail.rows().len()),
            _ => (&mut self.today_index, self.views.today.rows.len()),
        };
        if *index + 1 < len {
            *index += 1;
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    // ---- calendar navigation ----

    /// Previous/next month or year
    pub fn advance_cursor(&mut self, delta: i32) {
        self.cursor.advance(delta);
        self.refresh(Affected::CALENDAR);
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.cursor.set_granularity(granularity);
        self.refresh(Affected::CALENDAR);
    }

    /// Move the calendar highlight by columns and rows of the current grid
    pub fn move_highlight(&mut self, dx: i32, dy: i32) {
        match self.cursor.granularity {
            Granularity::Month => self.cursor.move_days(i64::from(dx) + 7 * i64::from(dy)),
            Granularity::Year => self
                .cursor
                .move_months_within_year(dx + MINI_MONTH_COLUMNS as i32 * dy),
        }
        self.refresh(Affected::CALENDAR);
    }

    /// Switch from the year view to one of its months
    pub fn focus_month(&mut self, month: u32) {
        self.cursor.focus_month(month);
        self.refresh(Affected::CALENDAR);
    }

    /// Open or close the detail view for a date
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        self.selected_date = date;
        self.detail_index = 0;
        self.ui_mode = if date.is_some() {
            UiMode::DateDetail
        } else {
            UiMode::Normal
        };
        self.refresh(Affected::DETAIL);
    }

    /// Enter on the calendar: open the day (month view) or drill into the month (year view)
    pub fn open_highlighted(&mut self) {
        match self.cursor.granularity {
            Granularity::Month => self.select_date(Some(self.cursor.reference_date)),
            Granularity::Year => self.focus_month(self.cursor.reference_date.month()),
        }
    }

    // ---- add-task form ----

    /// Open the add form for today (normal mode) or the open detail date
    pub fn start_add_task(&mut self) {
        let (date, return_mode) = match (self.ui_mode, self.selected_date) {
            (UiMode::DateDetail, Some(date)) => (date, UiMode::DateDetail),
            _ => (self.today, UiMode::Normal),
        };
        self.input_form = Some(InputFormState {
            date,
            text: String::new(),
            time: String::new(),
            editing_field: 0,
            return_mode,
        });
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.text.push(c),
                _ => form.time.push(c),
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.text.pop();
                }
                _ => {
                    form.time.pop();
                }
            }
        }
    }

    /// Submit the form. Blank text adds nothing; a bad time drops the reminder.
    pub fn submit_input_form(&mut self) -> Result<()> {
        let Some(form) = self.input_form.take() else {
            return Ok(());
        };
        self.ui_mode = form.return_mode;

        let reminder = if form.time.trim().is_empty() {
            None
        } else {
            match parse_time(&form.time) {
                Ok(time) => Some(reminder_for(form.date, time)),
                Err(error) => {
                    self.status = Some(format!("Reminder ignored: {}", error));
                    None
                }
            }
        };

        self.add_task(form.date, &form.text, reminder)?;
        Ok(())
    }

    pub fn cancel_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            self.ui_mode = form.return_mode;
        }
    }

    // ---- counter ----

    pub fn reset_counter(&mut self) -> Result<()> {
        self.counter.reset()
    }

    // ---- pomodoro ----

    pub fn start_timer(&mut self) {
        self.timer.start(Instant::now());
    }

    pub fn pause_timer(&mut self) {
        self.timer.pause();
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn dismiss_time_up(&mut self) {
        self.time_up = false;
    }

    /// Periodic work from the event loop: timer ticks and day rollover
    pub fn tick(&mut self, now: Instant, today: NaiveDate) {
        if let Some(TimerEvent::TimeUp) = self.timer.advance(now) {
            self.time_up = true;
            notifications::notify_time_up(TIME_UP_MESSAGE);
        }

        if today != self.today {
            tracing::info!(%today, "day changed");
            self.today = today;
            self.today_index = 0;
            self.refresh(Affected::ALL);
        }
    }
}
