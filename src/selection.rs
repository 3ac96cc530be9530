//! Selection state for the appointment screen.
//!
//! The state is a plain value. Every user action is a pure transition that
//! returns the next state; the host decides when to apply it.

use chrono::NaiveDate;
use std::fmt;

/// Which branch of the selection engine is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    /// Only appointments on the selected calendar day.
    #[default]
    ByDate,
    /// Every loaded appointment.
    All,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::ByDate => ViewMode::All,
            ViewMode::All => ViewMode::ByDate,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::ByDate => f.write_str("by-date"),
            ViewMode::All => f.write_str("all"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionState {
    pub selected_date: NaiveDate,
    pub mode: ViewMode,
}

impl SelectionState {
    pub fn new(selected_date: NaiveDate, mode: ViewMode) -> Self {
        SelectionState {
            selected_date,
            mode,
        }
    }

    /// Initial state of the screen: filtered to `today`.
    pub fn starting_on(today: NaiveDate) -> Self {
        Self::new(today, ViewMode::ByDate)
    }

    /// Picking a different date leaves "view all" mode. Re-picking the
    /// current date is not a change and keeps the state as is.
    #[must_use]
    pub fn select_date(self, date: NaiveDate) -> Self {
        if date == self.selected_date {
            return self;
        }
        SelectionState {
            selected_date: date,
            mode: ViewMode::ByDate,
        }
    }

    /// Flip between the filtered and the full list. The date is untouched.
    #[must_use]
    pub fn toggle_mode(self) -> Self {
        SelectionState {
            selected_date: self.selected_date,
            mode: self.mode.toggled(),
        }
    }

    #[must_use]
    pub fn go_to_today(self, today: NaiveDate) -> Self {
        self.select_date(today)
    }

    pub fn is_showing_all(&self) -> bool {
        self.mode == ViewMode::All
    }
}
