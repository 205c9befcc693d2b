//! Unified application error type.
//! Every layer (db, core, cli, export, import) returns AppError so the
//! validation / persistence / not-found taxonomy stays in one place.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid entry status: {0}")]
    InvalidStatus(String),

    #[error("Invalid report kind: {0}")]
    InvalidKind(String),

    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    // ---------------------------
    // Not found
    // ---------------------------
    #[error("Report #{0} not found")]
    ReportNotFound(i64),

    #[error("No entry for {0} in this report")]
    EntryNotFound(NaiveDate),

    // ---------------------------
    // Validation (gate) errors
    // ---------------------------
    #[error("Entry {0}: daily accomplishments are required before confirming")]
    MissingAccomplishments(NaiveDate),

    #[error("Entry {0}: time in and time out are required unless absent or holiday")]
    MissingTimes(NaiveDate),

    #[error("Entry {date}: time out {time_out} is earlier than time in {time_in}")]
    InvalidTimeRange {
        date: NaiveDate,
        time_in: String,
        time_out: String,
    },

    #[error("Entry {0} is confirmed and locked")]
    EntryLocked(NaiveDate),

    #[error("Entry {0} is marked absent or holiday: times cannot be edited")]
    TimesDisabled(NaiveDate),

    #[error("Report is {0}: entries cannot be edited")]
    ReportNotEditable(String),

    #[error("{0} entr(y/ies) not confirmed yet")]
    UnconfirmedEntries(usize),

    #[error("Submission requires the signature acknowledgement (--sign)")]
    SignatureRequired,

    #[error("Cannot move report from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Import(e.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Export(format!("JSON serialization error: {e}"))
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl AppError {
    /// True for errors raised by the confirmation/submission gate, before any
    /// persistence call was attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::MissingAccomplishments(_)
                | AppError::MissingTimes(_)
                | AppError::InvalidTimeRange { .. }
                | AppError::EntryLocked(_)
                | AppError::TimesDisabled(_)
                | AppError::ReportNotEditable(_)
                | AppError::UnconfirmedEntries(_)
                | AppError::SignatureRequired
                | AppError::InvalidTransition { .. }
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
