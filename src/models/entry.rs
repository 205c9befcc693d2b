use super::entry_status::EntryStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// Prefix of the synthetic ids given to days that were never stored.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Identity of an entry: a real row id once stored, otherwise a temporary id
/// derived from the day itself (so two materializations agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryId {
    Persisted(i64),
    Temporary(NaiveDate),
}

impl EntryId {
    pub fn is_temporary(&self) -> bool {
        matches!(self, EntryId::Temporary(_))
    }

    pub fn persisted(&self) -> Option<i64> {
        match self {
            EntryId::Persisted(id) => Some(*id),
            EntryId::Temporary(_) => None,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Persisted(id) => write!(f, "{id}"),
            EntryId::Temporary(d) => write!(f, "{}{}", TEMP_ID_PREFIX, d.format("%Y-%m-%d")),
        }
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            EntryId::Persisted(id) => s.serialize_i64(*id),
            EntryId::Temporary(_) => s.collect_str(self),
        }
    }
}

/// One calendar day of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry {
    pub id: EntryId,
    pub report_id: i64,
    pub entry_date: NaiveDate,             // ⇔ report_entries.entry_date (TEXT "YYYY-MM-DD")
    pub time_in: Option<NaiveTime>,        // ⇔ report_entries.time_in (TEXT "HH:MM")
    pub time_out: Option<NaiveTime>,       // ⇔ report_entries.time_out (TEXT "HH:MM")
    pub total_hours: f64,                  // derived, never edited directly
    pub daily_accomplishments: Option<String>,
    pub additional_notes: Option<String>,
    pub status: Option<EntryStatus>,
    pub is_confirmed: bool,
}

impl ReportEntry {
    /// Blank day: temporary id, no times, no text, unconfirmed.
    pub fn blank(report_id: i64, entry_date: NaiveDate) -> Self {
        Self {
            id: EntryId::Temporary(entry_date),
            report_id,
            entry_date,
            time_in: None,
            time_out: None,
            total_hours: 0.0,
            daily_accomplishments: None,
            additional_notes: None,
            status: None,
            is_confirmed: false,
        }
    }

    pub fn date_str(&self) -> String {
        self.entry_date.format("%Y-%m-%d").to_string()
    }

    pub fn time_in_str(&self) -> Option<String> {
        self.time_in.map(|t| t.format("%H:%M").to_string())
    }

    pub fn time_out_str(&self) -> Option<String> {
        self.time_out.map(|t| t.format("%H:%M").to_string())
    }

    /// Absent / holiday days are exempt from time in / time out.
    pub fn times_excused(&self) -> bool {
        self.status.is_some_and(|s| s.excuses_times())
    }

    pub fn has_accomplishments(&self) -> bool {
        self.daily_accomplishments
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}
