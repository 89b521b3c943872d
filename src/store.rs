//! Date-indexed task store.
//!
//! Holds the canonical `date -> [Task]` mapping and writes the whole mapping
//! back to storage before every mutating call returns. A date present in the
//! mapping always has at least one task.

use crate::domain::{Task, TaskId};
use crate::persistence::{Storage, ALL_TASKS_KEY};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Completion flag before and after a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub was_completed: bool,
    pub is_completed: bool,
}

pub type TaskMap = BTreeMap<NaiveDate, Vec<Task>>;

#[derive(Debug)]
pub struct TaskStore {
    tasks: TaskMap,
    storage: Storage,
}

impl TaskStore {
    /// Load the mapping; missing or malformed data yields an empty store.
    /// A malformed record is moved aside first so the next write cannot lose it.
    pub fn load(storage: Storage) -> Self {
        let tasks = match storage.get(ALL_TASKS_KEY) {
            Ok(Some(raw)) => match parse_tasks(&raw) {
                Ok(tasks) => tasks,
                Err(error) => {
                    match storage.set_aside(ALL_TASKS_KEY) {
                        Ok(path) => tracing::warn!(
                            %error,
                            backup = %path.display(),
                            "malformed task record; starting empty"
                        ),
                        Err(backup_error) => tracing::warn!(
                            %error,
                            %backup_error,
                            "malformed task record could not be moved aside; starting empty"
                        ),
                    }
                    TaskMap::new()
                }
            },
            Ok(None) => TaskMap::new(),
            Err(error) => {
                tracing::warn!(%error, "could not read task record; starting empty");
                TaskMap::new()
            }
        };
        tracing::debug!(dates = tasks.len(), "loaded task store");
        Self { tasks, storage }
    }

    fn persist(&self) -> Result<()> {
        let json = serde_json::to_string(&self.tasks).context("Failed to serialize tasks")?;
        self.storage.set(ALL_TASKS_KEY, &json)
    }

    /// Append a task to `date`. Blank text is ignored.
    pub fn add_task(
        &mut self,
        date: NaiveDate,
        text: &str,
        reminder_time: Option<String>,
    ) -> Result<Option<TaskId>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let task = Task::new(text.to_string(), reminder_time);
        let id = task.id;
        self.tasks.entry(date).or_default().push(task);
        self.persist()?;

        tracing::debug!(%date, %id, "added task");
        Ok(Some(id))
    }

    /// Flip a task's completion flag. Unknown date or id is a no-op.
    pub fn toggle_completion(&mut self, date: NaiveDate, id: TaskId) -> Result<Option<Toggle>> {
        let Some(task) = self
            .tasks
            .get_mut(&date)
            .and_then(|list| list.iter_mut().find(|t| t.id == id))
        else {
            tracing::debug!(%date, %id, "toggle ignored: task not found");
            return Ok(None);
        };

        let was_completed = task.completed;
        task.completed = !was_completed;
        let toggle = Toggle {
            was_completed,
            is_completed: task.completed,
        };
        self.persist()?;

        tracing::debug!(%date, %id, completed = toggle.is_completed, "toggled task");
        Ok(Some(toggle))
    }

    /// Remove a task; the date disappears once its last task is gone
    pub fn delete_task(&mut self, date: NaiveDate, id: TaskId) -> Result<bool> {
        let Some(list) = self.tasks.get_mut(&date) else {
            return Ok(false);
        };
        let Some(pos) = list.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        list.remove(pos);
        if list.is_empty() {
            self.tasks.remove(&date);
        }
        self.persist()?;

        tracing::debug!(%date, %id, "deleted task");
        Ok(true)
    }

    /// Tasks for `date` in display order (empty when none)
    pub fn tasks_for(&self, date: NaiveDate) -> &[Task] {
        self.tasks.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_tasks(&self, date: NaiveDate) -> bool {
        self.tasks.contains_key(&date)
    }

    pub fn completed_count(&self, date: NaiveDate) -> usize {
        self.tasks_for(date).iter().filter(|t| t.completed).count()
    }

    pub fn mapping(&self) -> &TaskMap {
        &self.tasks
    }
}

/// Decode the persisted mapping, dropping empty dates
fn parse_tasks(raw: &str) -> serde_json::Result<TaskMap> {
    let mut tasks = serde_json::from_str::<TaskMap>(raw)?;
    tasks.retain(|_, list| !list.is_empty());
    Ok(tasks)
}
