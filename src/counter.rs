use crate::persistence::{Storage, TOTAL_COMPLETED_KEY};
use anyhow::Result;

/// Lifetime count of completed-task transitions.
///
/// Independent of the task store: deleting tasks never lowers it, and
/// un-completing a task does not decrement it. Only `reset` goes down.
#[derive(Debug)]
pub struct CompletionCounter {
    value: u64,
    storage: Storage,
}

impl CompletionCounter {
    /// Load the counter; a missing or unparseable record counts as zero
    pub fn load(storage: Storage) -> Self {
        let value = match storage.get(TOTAL_COMPLETED_KEY) {
            Ok(Some(raw)) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(raw = %raw.trim(), "malformed completion counter; using 0");
                0
            }),
            Ok(None) => 0,
            Err(error) => {
                tracing::warn!(%error, "could not read completion counter; using 0");
                0
            }
        };
        Self { value, storage }
    }

    fn persist(&self) -> Result<()> {
        self.storage.set(TOTAL_COMPLETED_KEY, &self.value.to_string())
    }

    /// Count a completion transition. Only false -> true increments.
    pub fn record_completion(&mut self, was_completed: bool, is_completed: bool) -> Result<()> {
        if !was_completed && is_completed {
            self.value = self.value.saturating_add(1);
            self.persist()?;
            tracing::debug!(total = self.value, "completion recorded");
        }
        Ok(())
    }

    pub fn reset(&mut self) -> Result<()> {
        self.value = 0;
        self.persist()?;
        tracing::info!("completion counter reset");
        Ok(())
    }

    pub fn value(&self) -> u64 {
        self.value
    }
}
