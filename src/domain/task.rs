use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Format used for reminder timestamps: a date joined with a time of day
pub const REMINDER_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Canonical date key format
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Stable identifier assigned to a task when it is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task scheduled on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Records written before identifiers existed get a fresh one on load
    #[serde(default)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    /// Raw `YYYY-MM-DDThh:mm` string, kept verbatim even when unparseable
    #[serde(default)]
    pub reminder_time: Option<String>,
}

impl Task {
    pub fn new(text: String, reminder_time: Option<String>) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            reminder_time,
        }
    }

    /// Parsed reminder, if present and well formed
    pub fn reminder(&self) -> Option<NaiveDateTime> {
        self.reminder_time
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, REMINDER_FORMAT).ok())
    }

    /// Time-of-day badge text ("HH:MM"), omitted when the reminder is unparseable
    pub fn reminder_badge(&self) -> Option<String> {
        self.reminder().map(|dt| dt.format("%H:%M").to_string())
    }
}

/// Render a date as its canonical key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Join a date with a time of day into the stored reminder form
pub fn reminder_for(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format(REMINDER_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new("Buy milk".to_string(), None);
        assert!(!task.completed);
        assert!(task.reminder_time.is_none());
        assert!(task.reminder_badge().is_none());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a".to_string(), None);
        let b = Task::new("a".to_string(), None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_reminder_badge() {
        let task = Task::new("Call".to_string(), Some("2024-03-10T14:05".to_string()));
        assert_eq!(task.reminder_badge().as_deref(), Some("14:05"));
    }

    #[test]
    fn test_unparseable_reminder_has_no_badge() {
        let task = Task::new("Call".to_string(), Some("later".to_string()));
        assert!(task.reminder_badge().is_none());
        assert_eq!(task.reminder_time.as_deref(), Some("later"));
    }

    #[test]
    fn test_reminder_for() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let time = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
        assert_eq!(reminder_for(date, time), "2024-03-10T09:30");
        assert_eq!(date_key(date), "2024-03-10");
    }

    #[test]
    fn test_legacy_record_without_id_deserializes() {
        let json = r#"{"text":"Old","completed":true,"reminderTime":null}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.text, "Old");
        assert!(task.completed);
    }

    #[test]
    fn test_serialized_field_names() {
        let task = Task::new("x".to_string(), Some("2024-03-10T09:30".to_string()));
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"reminderTime\":\"2024-03-10T09:30\""));
        assert!(json.contains("\"completed\":false"));
    }
}
