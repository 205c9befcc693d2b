use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Weekly attendance reports and activity (accomplishment) reports share the
/// same entry workflow; the kind only labels the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Attendance,
    Activity,
}

impl ReportKind {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            ReportKind::Attendance => "attendance",
            ReportKind::Activity => "activity",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "attendance" => Some(ReportKind::Attendance),
            "activity" => Some(ReportKind::Activity),
            _ => None,
        }
    }
}
