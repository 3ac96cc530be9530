//! Loading appointment snapshots for the screen.

use crate::error::LoadError;
use crate::models::{Appointment, AppointmentStatus};
use chrono::{Local, NaiveDate, TimeZone};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Read a JSON array of appointments.
///
/// A single malformed entry (including an unknown status) fails the whole
/// load.
pub fn load_appointments(path: &Path) -> Result<Vec<Appointment>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let appointments: Vec<Appointment> =
        serde_json::from_str(&raw).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        file = %path.display(),
        count = appointments.len(),
        "loaded appointments"
    );
    Ok(appointments)
}

/// Demo collection used when no appointments file is supplied.
///
/// A row whose wall-clock time does not exist on `day` (DST gap) is skipped
/// with a warning.
pub fn sample_appointments(day: NaiveDate) -> Vec<Appointment> {
    let samples = [
        ("John Doe", "Regular Checkup", 9, 0, AppointmentStatus::Confirmed),
        ("Sarah Smith", "Follow-up", 10, 30, AppointmentStatus::Confirmed),
        ("Mike Johnson", "Consultation", 11, 45, AppointmentStatus::Completed),
        ("Emily Wilson", "Emergency", 14, 15, AppointmentStatus::Pending),
    ];

    samples
        .into_iter()
        .filter_map(|(patient, kind, hour, minute, status)| {
            let Some(start) = day
                .and_hms_opt(hour, minute, 0)
                .and_then(|naive| Local.from_local_datetime(&naive).earliest())
            else {
                warn!(%day, hour, minute, patient, "sample time does not exist locally; skipped");
                return None;
            };
            match Appointment::new(patient.to_string(), kind.to_string(), start, status) {
                Ok(appointment) => Some(appointment),
                Err(e) => {
                    warn!(error = %e, patient, "sample appointment rejected; skipped");
                    None
                }
            }
        })
        .collect()
}
