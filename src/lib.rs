//! Appointment selection and display-state logic for the doctor app.
//!
//! The host (UI, CLI) owns loading and rendering; this crate decides which
//! appointments are shown for a calendar selection and how they are labelled.

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod models;
pub mod screen;
pub mod selection;

pub use engine::{select, select_state, select_with_format, EmptyState, Selection};
pub use models::{Appointment, AppointmentStatus, Role, Staff, StatusColor, UnavailablePeriod};
pub use screen::{AppointmentNavigator, AppointmentScreen, ScreenAction, ScreenModel};
pub use selection::{SelectionState, ViewMode};
