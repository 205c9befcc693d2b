use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Attendance status of one day. "Unset" is modelled as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    Present,
    Late,
    Absent,
    Holiday,
}

impl EntryStatus {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryStatus::Present => "present",
            EntryStatus::Late => "late",
            EntryStatus::Absent => "absent",
            EntryStatus::Holiday => "holiday",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "present" => Some(EntryStatus::Present),
            "late" => Some(EntryStatus::Late),
            "absent" => Some(EntryStatus::Absent),
            "holiday" => Some(EntryStatus::Holiday),
            _ => None,
        }
    }

    /// Helper: parse user input (case-insensitive)
    pub fn parse(input: &str) -> AppResult<Self> {
        Self::from_db_str(&input.trim().to_lowercase())
            .ok_or_else(|| AppError::InvalidStatus(input.to_string()))
    }

    /// Absent and holiday days need no time in / time out.
    pub fn excuses_times(&self) -> bool {
        matches!(self, EntryStatus::Absent | EntryStatus::Holiday)
    }
}
