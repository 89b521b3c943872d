use crate::domain::TimerPhase;
use crate::ticker::Ticker;
use std::time::Instant;

/// Default focus session: 25 minutes
pub const DEFAULT_DURATION_SECS: u32 = 25 * 60;

/// Message shown when a session ends
pub const TIME_UP_MESSAGE: &str = "Time's up! Take a break 🍅";

/// Events surfaced to the caller by the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    TimeUp,
}

/// Countdown timer: Idle -> Running <-> Paused, back to Idle on reset or expiry
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    duration_seconds: u32,
    remaining_seconds: u32,
    phase: TimerPhase,
    ticker: Ticker,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl PomodoroTimer {
    pub fn new(duration_seconds: u32) -> Self {
        Self {
            duration_seconds,
            remaining_seconds: duration_seconds,
            phase: TimerPhase::Idle,
            ticker: Ticker::every_second(),
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn duration_seconds(&self) -> u32 {
        self.duration_seconds
    }

    /// Idle|Paused -> Running. A finished session restarts from full length.
    pub fn start(&mut self, now: Instant) {
        if self.phase == TimerPhase::Running {
            return;
        }
        if self.remaining_seconds == 0 {
            self.remaining_seconds = self.duration_seconds;
        }
        self.phase = TimerPhase::Running;
        self.ticker.arm(now);
        tracing::debug!(remaining = self.remaining_seconds, "pomodoro started");
    }

    /// Running -> Paused; no-op otherwise
    pub fn pause(&mut self) {
        if self.phase != TimerPhase::Running {
            return;
        }
        self.phase = TimerPhase::Paused;
        self.ticker.cancel();
        tracing::debug!(remaining = self.remaining_seconds, "pomodoro paused");
    }

    /// Any phase -> Idle with the full duration
    pub fn reset(&mut self) {
        self.phase = TimerPhase::Idle;
        self.remaining_seconds = self.duration_seconds;
        self.ticker.cancel();
    }

    /// One second of countdown
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if self.phase != TimerPhase::Running {
            return None;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.phase = TimerPhase::Idle;
            self.ticker.cancel();
            tracing::info!("pomodoro finished");
            return Some(TimerEvent::TimeUp);
        }
        None
    }

    /// Apply every tick that fell due up to `now`
    pub fn advance(&mut self, now: Instant) -> Option<TimerEvent> {
        let due = self.ticker.due(now);
        let mut event = None;
        for _ in 0..due {
            if let Some(e) = self.tick() {
                event = Some(e);
            }
        }
        event
    }

    /// "MM:SS", zero padded
    pub fn display(&self) -> String {
        format_clock(self.remaining_seconds)
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
