//! Error types for the appointment screen core.

use std::path::PathBuf;
use thiserror::Error;

/// Rejected input when constructing or deserializing a model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid appointment status: '{0}'. Must be one of: confirmed, completed, pending, cancelled")]
    InvalidStatus(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("unavailable period ends before it starts")]
    InvalidPeriod,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid {field} '{value}': not a valid chrono format")]
    InvalidFormat { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read appointments from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed appointments file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("appointment {0} is not in the displayed list")]
    AppointmentNotDisplayed(String),
}
