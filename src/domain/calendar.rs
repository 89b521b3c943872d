use super::enums::Granularity;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Number of cells in a month grid (six full weeks)
pub const GRID_CELLS: usize = 42;

/// Month miniatures per row in the year view
pub const MINI_MONTH_COLUMNS: usize = 4;

/// Which slice of the calendar is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    /// Highlighted day; its month (or year) is the one displayed
    pub reference_date: NaiveDate,
    pub granularity: Granularity,
}

impl CalendarCursor {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            reference_date: today,
            granularity: Granularity::Month,
        }
    }

    /// Move one display unit (a month or a year) forwards or backwards.
    /// The day is clamped to the length of the target month.
    pub fn advance(&mut self, delta: i32) {
        let months = match self.granularity {
            Granularity::Month => delta.unsigned_abs(),
            Granularity::Year => delta.unsigned_abs() * 12,
        };
        let shifted = if delta >= 0 {
            self.reference_date.checked_add_months(Months::new(months))
        } else {
            self.reference_date.checked_sub_months(Months::new(months))
        };
        if let Some(date) = shifted {
            self.reference_date = date;
        }
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.granularity = granularity;
    }

    /// Move the highlighted day; crossing a month edge changes the displayed month
    pub fn move_days(&mut self, delta: i64) {
        let moved = if delta >= 0 {
            self.reference_date.checked_add_days(Days::new(delta as u64))
        } else {
            self.reference_date.checked_sub_days(Days::new(delta.unsigned_abs()))
        };
        if let Some(date) = moved {
            self.reference_date = date;
        }
    }

    /// Move the highlighted month inside the displayed year (year view)
    pub fn move_months_within_year(&mut self, delta: i32) {
        let month = (self.reference_date.month() as i32 - 1 + delta).rem_euclid(12) as u32 + 1;
        if let Some(date) = first_of_month(self.reference_date.year(), month) {
            self.reference_date = date;
        }
    }

    /// Drill into one month of the displayed year
    pub fn focus_month(&mut self, month: u32) {
        if let Some(date) = first_of_month(self.reference_date.year(), month) {
            self.reference_date = date;
            self.granularity = Granularity::Month;
        }
    }
}

pub fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// First cell of a month grid: the Sunday on or before the 1st
pub fn grid_start(year: i32, month: u32) -> Option<NaiveDate> {
    let first = first_of_month(year, month)?;
    let offset = first.weekday().num_days_from_sunday() as u64;
    first.checked_sub_days(Days::new(offset))
}

/// The 42 consecutive dates shown for a month
pub fn grid_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(start) = grid_start(year, month) else {
        return Vec::new();
    };
    start.iter_days().take(GRID_CELLS).collect()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_starts_on_sunday() {
        // March 1st 2024 is a Friday
        let start = grid_start(2024, 3).unwrap();
        assert_eq!(start, date(2024, 2, 25));
        assert_eq!(start.weekday(), Weekday::Sun);
    }

    #[test]
    fn test_grid_when_first_is_sunday() {
        // September 1st 2024 is a Sunday
        assert_eq!(grid_start(2024, 9).unwrap(), date(2024, 9, 1));
    }

    #[test]
    fn test_grid_has_42_days() {
        let dates = grid_dates(2024, 2);
        assert_eq!(dates.len(), GRID_CELLS);
        assert_eq!(dates[41], dates[0] + Days::new(41));
    }

    #[test]
    fn test_advance_month_clamps_day() {
        let mut cursor = CalendarCursor::new(date(2024, 1, 31));
        cursor.advance(1);
        assert_eq!(cursor.reference_date, date(2024, 2, 29));
        cursor.advance(-1);
        assert_eq!(cursor.reference_date, date(2024, 1, 29));
    }

    #[test]
    fn test_advance_year() {
        let mut cursor = CalendarCursor::new(date(2024, 2, 29));
        cursor.set_granularity(Granularity::Year);
        cursor.advance(1);
        assert_eq!(cursor.reference_date, date(2025, 2, 28));
        cursor.advance(-2);
        assert_eq!(cursor.reference_date, date(2023, 2, 28));
    }

    #[test]
    fn test_move_days_crosses_month() {
        let mut cursor = CalendarCursor::new(date(2024, 3, 31));
        cursor.move_days(1);
        assert_eq!(cursor.reference_date, date(2024, 4, 1));
        cursor.move_days(-7);
        assert_eq!(cursor.reference_date, date(2024, 3, 25));
    }

    #[test]
    fn test_move_months_within_year_wraps() {
        let mut cursor = CalendarCursor::new(date(2024, 12, 15));
        cursor.move_months_within_year(1);
        assert_eq!(cursor.reference_date, date(2024, 1, 1));
        cursor.move_months_within_year(-1);
        assert_eq!(cursor.reference_date, date(2024, 12, 1));
    }

    #[test]
    fn test_focus_month_switches_to_month_view() {
        let mut cursor = CalendarCursor::new(date(2024, 6, 15));
        cursor.set_granularity(Granularity::Year);
        cursor.focus_month(11);
        assert_eq!(cursor.granularity, Granularity::Month);
        assert_eq!(cursor.reference_date, date(2024, 11, 1));
    }
}
