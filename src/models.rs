//! Data models for the doctor appointment screen.
//!
//! This module defines the core data structures used throughout the crate:
//! - AppointmentStatus: closed set of appointment lifecycle states
//! - StatusColor: badge colour class for a status
//! - Appointment: a scheduled patient encounter
//! - Staff / UnavailablePeriod: the doctor record appointments belong to

use crate::error::ModelError;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Default clock format for appointment rows, e.g. `9:00 AM`.
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M %p";

/// Lifecycle state of an appointment.
///
/// Every mapping over this enum is an exhaustive `match`; adding a variant
/// must touch each of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum AppointmentStatus {
    Confirmed,
    Completed,
    Pending,
    Cancelled,
}

/// Colour class used to paint a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColor {
    Blue,
    Green,
    Orange,
    Red,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Pending,
        AppointmentStatus::Cancelled,
    ];

    /// Badge label.
    pub fn name(&self) -> &'static str {
        match self {
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            AppointmentStatus::Confirmed => StatusColor::Blue,
            AppointmentStatus::Completed => StatusColor::Green,
            AppointmentStatus::Pending => StatusColor::Orange,
            AppointmentStatus::Cancelled => StatusColor::Red,
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "pending" => Ok(AppointmentStatus::Pending),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            _ => Err(ModelError::InvalidStatus(value.to_string())),
        }
    }
}

impl TryFrom<String> for AppointmentStatus {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl StatusColor {
    pub fn name(&self) -> &'static str {
        match self {
            StatusColor::Blue => "blue",
            StatusColor::Green => "green",
            StatusColor::Orange => "orange",
            StatusColor::Red => "red",
        }
    }
}

/// A scheduled patient-doctor encounter.
///
/// Immutable once constructed; all fields are validated by [`Appointment::new`]
/// or on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AppointmentRecord")]
pub struct Appointment {
    id: String,
    patient_name: String,
    appointment_type: String,
    start_date: DateTime<Local>,
    status: AppointmentStatus,
}

#[derive(Deserialize)]
struct AppointmentRecord {
    #[serde(default)]
    id: Option<String>,
    patient_name: String,
    appointment_type: String,
    start_date: DateTime<Local>,
    status: AppointmentStatus,
}

impl TryFrom<AppointmentRecord> for Appointment {
    type Error = ModelError;

    fn try_from(record: AppointmentRecord) -> Result<Self, Self::Error> {
        let id = record.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Appointment::with_id(
            id,
            record.patient_name,
            record.appointment_type,
            record.start_date,
            record.status,
        )
    }
}

impl Appointment {
    /// Create a new appointment with a freshly generated id.
    pub fn new(
        patient_name: String,
        appointment_type: String,
        start_date: DateTime<Local>,
        status: AppointmentStatus,
    ) -> Result<Self, ModelError> {
        Self::with_id(
            Uuid::new_v4().to_string(),
            patient_name,
            appointment_type,
            start_date,
            status,
        )
    }

    /// Create an appointment with a caller-supplied id.
    pub fn with_id(
        id: String,
        patient_name: String,
        appointment_type: String,
        start_date: DateTime<Local>,
        status: AppointmentStatus,
    ) -> Result<Self, ModelError> {
        if id.trim().is_empty() {
            return Err(ModelError::EmptyField("Appointment id"));
        }
        if patient_name.trim().is_empty() {
            return Err(ModelError::EmptyField("Patient name"));
        }
        if appointment_type.trim().is_empty() {
            return Err(ModelError::EmptyField("Appointment type"));
        }

        Ok(Appointment {
            id,
            patient_name,
            appointment_type,
            start_date,
            status,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn patient_name(&self) -> &str {
        &self.patient_name
    }

    pub fn appointment_type(&self) -> &str {
        &self.appointment_type
    }

    pub fn start_date(&self) -> DateTime<Local> {
        self.start_date
    }

    pub fn status(&self) -> AppointmentStatus {
        self.status
    }

    /// Local calendar day the appointment falls on.
    pub fn day(&self) -> NaiveDate {
        self.start_date.date_naive()
    }

    pub fn time_label(&self) -> String {
        self.start_date.format(DEFAULT_TIME_FORMAT).to_string()
    }

    pub fn time_label_with(&self, format: &str) -> String {
        self.start_date.format(format).to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Doctor,
}

/// A closed date range during which a staff member cannot take appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PeriodRecord")]
pub struct UnavailablePeriod {
    start_date: DateTime<Local>,
    end_date: DateTime<Local>,
}

#[derive(Deserialize)]
struct PeriodRecord {
    start_date: DateTime<Local>,
    end_date: DateTime<Local>,
}

impl TryFrom<PeriodRecord> for UnavailablePeriod {
    type Error = ModelError;

    fn try_from(record: PeriodRecord) -> Result<Self, Self::Error> {
        UnavailablePeriod::new(record.start_date, record.end_date)
    }
}

impl UnavailablePeriod {
    pub fn new(start_date: DateTime<Local>, end_date: DateTime<Local>) -> Result<Self, ModelError> {
        if end_date < start_date {
            return Err(ModelError::InvalidPeriod);
        }
        Ok(UnavailablePeriod {
            start_date,
            end_date,
        })
    }

    pub fn start_date(&self) -> DateTime<Local> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Local> {
        self.end_date
    }

    /// Check if any part of the given calendar day lies within the period.
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date.date_naive() <= day && day <= self.end_date.date_naive()
    }
}

fn new_staff_id() -> String {
    Uuid::new_v4().to_string()
}

/// A doctor record as delivered by the hospital backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    #[serde(rename = "_id", default = "new_staff_id")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email_address: String,
    #[serde(default, skip_serializing)]
    pub password: String,
    pub contact_number: String,
    #[serde(default)]
    pub specializations: Vec<String>,
    pub department: String,
    #[serde(default)]
    pub on_leave: bool,
    #[serde(default)]
    pub unavailability_periods: Vec<UnavailablePeriod>,
    pub license_id: String,
    #[serde(default)]
    pub role: Role,
}

impl Staff {
    pub fn full_name(&self) -> String {
        let last_name = self.last_name.as_deref().unwrap_or("");
        format!("{} {}", self.first_name, last_name).trim().to_string()
    }

    /// A staff member is available on a day unless on leave or inside an
    /// unavailable period.
    pub fn is_available_on(&self, day: NaiveDate) -> bool {
        !self.on_leave && !self.unavailability_periods.iter().any(|p| p.covers(day))
    }
}

impl fmt::Debug for Staff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Staff")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password", &"<redacted>")
            .field("contact_number", &self.contact_number)
            .field("specializations", &self.specializations)
            .field("department", &self.department)
            .field("on_leave", &self.on_leave)
            .field("unavailability_periods", &self.unavailability_periods)
            .field("license_id", &self.license_id)
            .field("role", &self.role)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn staff(last_name: Option<&str>) -> Staff {
        Staff {
            id: "s-1".to_string(),
            first_name: "Anita".to_string(),
            last_name: last_name.map(str::to_string),
            email_address: "anita@hospital.test".to_string(),
            password: "secret".to_string(),
            contact_number: "555-0100".to_string(),
            specializations: vec!["Cardiology".to_string()],
            department: "Cardiology".to_string(),
            on_leave: false,
            unavailability_periods: vec![],
            license_id: "LIC-42".to_string(),
            role: Role::Doctor,
        }
    }

    #[test]
    fn status_parsing_accepts_canonical_names_only() {
        assert_eq!("Confirmed".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Confirmed));
        assert_eq!(" pending ".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Pending));
        assert_eq!("cancelled".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Cancelled));
        assert_eq!(
            "canceled".parse::<AppointmentStatus>(),
            Err(ModelError::InvalidStatus("canceled".to_string()))
        );
        assert!("no-show".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn every_status_has_a_distinct_color() {
        let colors: std::collections::HashSet<_> =
            AppointmentStatus::ALL.iter().map(|s| s.color()).collect();
        assert_eq!(colors.len(), AppointmentStatus::ALL.len());
        assert_eq!(AppointmentStatus::Confirmed.color(), StatusColor::Blue);
        assert_eq!(AppointmentStatus::Completed.color(), StatusColor::Green);
        assert_eq!(AppointmentStatus::Pending.color(), StatusColor::Orange);
        assert_eq!(AppointmentStatus::Cancelled.color(), StatusColor::Red);
    }

    #[test]
    fn appointment_rejects_blank_fields() {
        let start = at(2025, 4, 5, 9, 0);
        assert_eq!(
            Appointment::new(" ".into(), "Checkup".into(), start, AppointmentStatus::Pending),
            Err(ModelError::EmptyField("Patient name"))
        );
        assert_eq!(
            Appointment::new("John Doe".into(), "".into(), start, AppointmentStatus::Pending),
            Err(ModelError::EmptyField("Appointment type"))
        );
    }

    #[test]
    fn appointment_time_label_uses_twelve_hour_clock() {
        let apt = Appointment::new(
            "Emily Wilson".into(),
            "Emergency".into(),
            at(2025, 4, 5, 14, 15),
            AppointmentStatus::Pending,
        )
        .unwrap();
        assert_eq!(apt.time_label(), "2:15 PM");
        assert_eq!(apt.day(), NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    }

    #[test]
    fn appointment_json_with_unknown_status_is_rejected() {
        let json = r#"{
            "patient_name": "John Doe",
            "appointment_type": "Checkup",
            "start_date": "2025-04-05T09:00:00Z",
            "status": "canceled"
        }"#;
        let err = serde_json::from_str::<Appointment>(json).unwrap_err();
        assert!(err.to_string().contains("invalid appointment status"));
    }

    #[test]
    fn appointment_json_without_id_gets_one() {
        let json = r#"{
            "patient_name": "John Doe",
            "appointment_type": "Checkup",
            "start_date": "2025-04-05T09:00:00Z",
            "status": "confirmed"
        }"#;
        let apt: Appointment = serde_json::from_str(json).unwrap();
        assert!(!apt.id().is_empty());
        assert_eq!(apt.status(), AppointmentStatus::Confirmed);
    }

    #[test]
    fn full_name_trims_missing_last_name() {
        assert_eq!(staff(Some("Rao")).full_name(), "Anita Rao");
        assert_eq!(staff(None).full_name(), "Anita");
    }

    #[test]
    fn period_must_not_end_before_start() {
        assert_eq!(
            UnavailablePeriod::new(at(2025, 4, 6, 0, 0), at(2025, 4, 5, 0, 0)),
            Err(ModelError::InvalidPeriod)
        );
    }

    #[test]
    fn availability_respects_leave_and_periods() {
        let mut doctor = staff(Some("Rao"));
        let day = |d| NaiveDate::from_ymd_opt(2025, 4, d).unwrap();
        doctor.unavailability_periods =
            vec![UnavailablePeriod::new(at(2025, 4, 5, 8, 0), at(2025, 4, 7, 12, 0)).unwrap()];

        assert!(doctor.is_available_on(day(4)));
        assert!(!doctor.is_available_on(day(5)));
        assert!(!doctor.is_available_on(day(7)));
        assert!(doctor.is_available_on(day(8)));

        doctor.on_leave = true;
        assert!(!doctor.is_available_on(day(4)));
    }

    #[test]
    fn staff_deserializes_backend_keys_and_hides_password() {
        let json = r#"{
            "_id": "abc",
            "first_name": "Anita",
            "email_address": "anita@hospital.test",
            "password": "secret",
            "contact_number": "555-0100",
            "department": "Cardiology",
            "license_id": "LIC-42"
        }"#;
        let doctor: Staff = serde_json::from_str(json).unwrap();
        assert_eq!(doctor.id, "abc");
        assert_eq!(doctor.role, Role::Doctor);
        assert!(!doctor.on_leave);
        assert!(!format!("{doctor:?}").contains("secret"));

        let out = serde_json::to_string(&doctor).unwrap();
        assert!(!out.contains("password"));
        assert!(out.contains("\"role\":\"doctor\""));
    }
}
