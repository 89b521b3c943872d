/// Calendar display granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Month,
    Year,
}

impl Granularity {
    /// Parse from a short key like "month"
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

/// Phase of the pomodoro countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
}

impl TimerPhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }
}

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Today,
    Calendar,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Self::Today => Self::Calendar,
            Self::Calendar => Self::Today,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    DateDetail, // Detail modal for the selected date
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granularity_keys() {
        assert_eq!(Granularity::from_key("month"), Some(Granularity::Month));
        assert_eq!(Granularity::from_key("YEAR"), Some(Granularity::Year));
        assert_eq!(Granularity::from_key("week"), None);
        assert_eq!(Granularity::Year.as_key(), "year");
    }

    #[test]
    fn test_focus_toggle() {
        assert_eq!(Focus::Today.toggle(), Focus::Calendar);
        assert_eq!(Focus::Calendar.toggle(), Focus::Today);
    }

    #[test]
    fn test_timer_phase_label() {
        assert_eq!(TimerPhase::Running.label(), "RUNNING");
        assert_eq!(TimerPhase::Paused.label(), "PAUSED");
    }
}
