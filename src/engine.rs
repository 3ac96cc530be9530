//! Appointment selection engine.
//!
//! Decides which appointments are visible for a calendar selection, in what
//! order, and which empty-state message to show. Pure: the same inputs always
//! produce the same output.

use crate::models::Appointment;
use crate::selection::{SelectionState, ViewMode};
use chrono::NaiveDate;
use tracing::debug;

/// Default rendering of the selected date, e.g. `April 5, 2025`.
pub const DEFAULT_DATE_FORMAT: &str = "%B %-d, %Y";

pub const EMPTY_TITLE: &str = "No Appointments Found";

/// Message shown in place of the list when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: String,
}

impl EmptyState {
    fn for_mode(mode: ViewMode, selected_date: NaiveDate, date_format: &str) -> Self {
        let message = match mode {
            ViewMode::All => "You don't have any appointments scheduled.".to_string(),
            ViewMode::ByDate => format!(
                "You don't have any appointments scheduled for {}. \
                 Select a different date to view other appointments.",
                selected_date.format(date_format)
            ),
        };
        EmptyState {
            title: EMPTY_TITLE,
            message,
        }
    }
}

/// Result of a selection query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<'a> {
    appointments: Vec<&'a Appointment>,
    empty_state: Option<EmptyState>,
}

impl<'a> Selection<'a> {
    /// Appointments to display, ascending by start time.
    pub fn appointments(&self) -> &[&'a Appointment] {
        &self.appointments
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Present iff the selection is empty.
    pub fn empty_state(&self) -> Option<&EmptyState> {
        self.empty_state.as_ref()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.appointments.iter().map(|a| a.id()).collect()
    }
}

/// Select the appointments to display for a date and mode.
pub fn select<'a>(
    appointments: &'a [Appointment],
    selected_date: NaiveDate,
    mode: ViewMode,
) -> Selection<'a> {
    select_with_format(appointments, selected_date, mode, DEFAULT_DATE_FORMAT)
}

/// Like [`select`], rendering the date in the empty-state message with a
/// custom chrono format string.
pub fn select_with_format<'a>(
    appointments: &'a [Appointment],
    selected_date: NaiveDate,
    mode: ViewMode,
    date_format: &str,
) -> Selection<'a> {
    let mut shown: Vec<&Appointment> = match mode {
        ViewMode::All => appointments.iter().collect(),
        ViewMode::ByDate => appointments
            .iter()
            .filter(|apt| apt.day() == selected_date)
            .collect(),
    };
    // sort_by_key is stable: equal instants keep their input order.
    shown.sort_by_key(|apt| apt.start_date());

    debug!(
        mode = %mode,
        selected_date = %selected_date,
        total = appointments.len(),
        shown = shown.len(),
        "appointments selected"
    );

    let empty_state = shown
        .is_empty()
        .then(|| EmptyState::for_mode(mode, selected_date, date_format));

    Selection {
        appointments: shown,
        empty_state,
    }
}

/// Convenience wrapper taking the whole selection state.
pub fn select_state<'a>(appointments: &'a [Appointment], state: SelectionState) -> Selection<'a> {
    select(appointments, state.selected_date, state.mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::{Local, TimeZone};

    fn apt(id: &str, patient: &str, d: u32, h: u32, m: u32, status: AppointmentStatus) -> Appointment {
        let start = Local.with_ymd_and_hms(2025, 4, d, h, m, 0).unwrap();
        Appointment::with_id(id.into(), patient.into(), "Consultation".into(), start, status)
            .unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
    }

    fn scenario() -> Vec<Appointment> {
        vec![
            apt("1", "John Doe", 5, 9, 0, AppointmentStatus::Confirmed),
            apt("2", "Sarah Smith", 5, 10, 30, AppointmentStatus::Confirmed),
            apt("3", "Mike Johnson", 6, 11, 45, AppointmentStatus::Completed),
        ]
    }

    #[test]
    fn by_date_returns_same_day_in_order() {
        let appointments = scenario();
        let selection = select(&appointments, day(5), ViewMode::ByDate);
        assert_eq!(selection.ids(), vec!["1", "2"]);
        assert!(!selection.is_empty());
        assert!(selection.empty_state().is_none());
    }

    #[test]
    fn all_returns_everything_in_order() {
        let appointments = scenario();
        let selection = select(&appointments, day(5), ViewMode::All);
        assert_eq!(selection.ids(), vec!["1", "2", "3"]);
    }

    #[test]
    fn unordered_input_is_sorted_by_start() {
        let appointments = vec![
            apt("late", "C", 7, 16, 0, AppointmentStatus::Pending),
            apt("early", "A", 3, 8, 0, AppointmentStatus::Pending),
            apt("mid", "B", 5, 12, 0, AppointmentStatus::Pending),
        ];
        let selection = select(&appointments, day(5), ViewMode::All);
        assert_eq!(selection.ids(), vec!["early", "mid", "late"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let appointments = vec![
            apt("b", "Second", 5, 9, 0, AppointmentStatus::Confirmed),
            apt("a", "First", 5, 9, 0, AppointmentStatus::Pending),
            apt("c", "Earlier", 5, 8, 0, AppointmentStatus::Pending),
        ];
        for mode in [ViewMode::All, ViewMode::ByDate] {
            let selection = select(&appointments, day(5), mode);
            assert_eq!(selection.ids(), vec!["c", "b", "a"]);
        }
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let appointments = vec![
            apt("dup", "John Doe", 5, 9, 0, AppointmentStatus::Confirmed),
            apt("dup", "John Doe", 5, 9, 0, AppointmentStatus::Confirmed),
        ];
        assert_eq!(select(&appointments, day(5), ViewMode::ByDate).len(), 2);
    }

    #[test]
    fn by_date_is_subset_of_all_and_only_that_day() {
        let appointments = scenario();
        for d in 4..=7 {
            let all = select(&appointments, day(d), ViewMode::All);
            let by_date = select(&appointments, day(d), ViewMode::ByDate);
            assert_eq!(all.len(), appointments.len());
            for shown in by_date.appointments() {
                assert_eq!(shown.day(), day(d));
                assert!(all.appointments().contains(shown));
            }
        }
    }

    #[test]
    fn selection_is_idempotent() {
        let appointments = scenario();
        let first = select(&appointments, day(5), ViewMode::ByDate);
        let second = select(&appointments, day(5), ViewMode::ByDate);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_by_date_mentions_formatted_date() {
        let selection = select(&[], day(5), ViewMode::ByDate);
        assert!(selection.is_empty());
        let empty = selection.empty_state().unwrap();
        assert_eq!(empty.title, EMPTY_TITLE);
        assert!(empty.message.contains("April 5, 2025"));
        assert!(empty.message.contains("Select a different date"));
    }

    #[test]
    fn empty_all_uses_generic_message() {
        let selection = select(&[], day(5), ViewMode::All);
        assert_eq!(
            selection.empty_state().unwrap().message,
            "You don't have any appointments scheduled."
        );
    }

    #[test]
    fn no_match_on_day_yields_date_message() {
        let appointments = scenario();
        let selection = select(&appointments, day(10), ViewMode::ByDate);
        assert!(selection.is_empty());
        assert!(selection
            .empty_state()
            .unwrap()
            .message
            .contains("April 10, 2025"));
    }

    #[test]
    fn custom_date_format_is_used_in_message() {
        let selection = select_with_format(&[], day(5), ViewMode::ByDate, "%Y-%m-%d");
        assert!(selection.empty_state().unwrap().message.contains("2025-04-05"));
    }

    #[test]
    fn select_state_follows_state_mode() {
        let appointments = scenario();
        let state = SelectionState::starting_on(day(6));
        assert_eq!(select_state(&appointments, state).ids(), vec!["3"]);
        assert_eq!(select_state(&appointments, state.toggle_mode()).len(), 3);
    }
}
