use serde::{Deserialize, Serialize};
use std::fmt;

/// Document lifecycle of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    NotSubmitted,
    Pending,
    Approved,
    Rejected,
}

impl ReportStatus {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReportStatus::NotSubmitted => "not_submitted",
            ReportStatus::Pending => "pending",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "not_submitted" => Some(ReportStatus::NotSubmitted),
            "pending" => Some(ReportStatus::Pending),
            "approved" => Some(ReportStatus::Approved),
            "rejected" => Some(ReportStatus::Rejected),
            _ => None,
        }
    }

    /// Entries may only be edited or confirmed in these states.
    pub fn is_open(&self) -> bool {
        matches!(self, ReportStatus::NotSubmitted | ReportStatus::Rejected)
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportStatus::NotSubmitted => "not submitted",
            ReportStatus::Pending => "pending",
            ReportStatus::Approved => "approved",
            ReportStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}
