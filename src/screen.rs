//! Appointment screen presenter.
//!
//! Holds the loaded snapshot and the current [`SelectionState`], applies user
//! actions through the pure transitions and turns the engine's output into a
//! [`ScreenModel`] the host can render. Filtering lives in the engine only.

use crate::config::ScreenConfig;
use crate::engine::{select_with_format, EmptyState};
use crate::error::ScreenError;
use crate::models::{Appointment, AppointmentStatus, StatusColor};
use crate::selection::{SelectionState, ViewMode};
use chrono::NaiveDate;
use tracing::{info, warn};

/// Navigation capability supplied by the host.
///
/// The presenter borrows it for the duration of a single action and never
/// stores it.
pub trait AppointmentNavigator {
    fn open_appointment(&mut self, appointment: &Appointment);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenAction {
    SelectDate(NaiveDate),
    ToggleMode,
    GoToToday(NaiveDate),
    OpenAppointment(String),
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRow {
    pub id: String,
    pub patient_name: String,
    pub appointment_type: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub status_color: StatusColor,
}

/// Everything the host needs to draw the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub state: SelectionState,
    pub title: &'static str,
    pub toggle_label: &'static str,
    pub rows: Vec<AppointmentRow>,
    pub empty_state: Option<EmptyState>,
    pub show_go_to_today: bool,
}

pub struct AppointmentScreen {
    appointments: Vec<Appointment>,
    state: SelectionState,
    config: ScreenConfig,
}

impl AppointmentScreen {
    pub fn new(appointments: Vec<Appointment>, today: NaiveDate, config: ScreenConfig) -> Self {
        let mode = if config.start_in_all_mode {
            ViewMode::All
        } else {
            ViewMode::ByDate
        };
        AppointmentScreen {
            appointments,
            state: SelectionState::new(today, mode),
            config,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Replace the snapshot, e.g. after a fresh fetch. Selection is kept.
    pub fn replace_appointments(&mut self, appointments: Vec<Appointment>) {
        info!(count = appointments.len(), "appointment snapshot replaced");
        self.appointments = appointments;
    }

    pub fn handle(
        &mut self,
        action: ScreenAction,
        navigator: &mut dyn AppointmentNavigator,
    ) -> Result<(), ScreenError> {
        match action {
            ScreenAction::SelectDate(date) => {
                self.state = self.state.select_date(date);
            }
            ScreenAction::ToggleMode => {
                self.state = self.state.toggle_mode();
            }
            ScreenAction::GoToToday(today) => {
                self.state = self.state.go_to_today(today);
            }
            ScreenAction::OpenAppointment(id) => {
                let selection = select_with_format(
                    &self.appointments,
                    self.state.selected_date,
                    self.state.mode,
                    &self.config.date_format,
                );
                match selection.appointments().iter().find(|a| a.id() == id) {
                    Some(appointment) => navigator.open_appointment(appointment),
                    None => {
                        warn!(appointment_id = %id, "open requested for hidden appointment");
                        return Err(ScreenError::AppointmentNotDisplayed(id));
                    }
                }
                return Ok(());
            }
        }

        info!(
            mode = %self.state.mode,
            selected_date = %self.state.selected_date,
            "selection changed"
        );
        Ok(())
    }

    pub fn model(&self) -> ScreenModel {
        let selection = select_with_format(
            &self.appointments,
            self.state.selected_date,
            self.state.mode,
            &self.config.date_format,
        );

        let rows = selection
            .appointments()
            .iter()
            .map(|apt| AppointmentRow {
                id: apt.id().to_string(),
                patient_name: apt.patient_name().to_string(),
                appointment_type: apt.appointment_type().to_string(),
                time: apt.time_label_with(&self.config.time_format),
                status: apt.status(),
                status_color: apt.status().color(),
            })
            .collect();

        let (title, toggle_label) = match self.state.mode {
            ViewMode::All => ("All Appointments", "Filter by Date"),
            ViewMode::ByDate => ("Appointments", "See All"),
        };

        ScreenModel {
            state: self.state,
            title,
            toggle_label,
            rows,
            show_go_to_today: selection.is_empty() && self.state.mode == ViewMode::ByDate,
            empty_state: selection.empty_state().cloned(),
        }
    }
}
