use crate::core::calculator::hours::HourPolicy;
use crate::core::session::ReportSession;
use crate::core::store::ReportStore;
use crate::errors::AppResult;
use crate::models::entry::ReportEntry;
use crate::models::entry_status::EntryStatus;
use crate::ui::messages::{info, success};
use crate::utils::time::format_hours;
use chrono::{NaiveDate, NaiveTime};

/// Field changes requested for one day.
#[derive(Debug, Clone, Default)]
pub struct EntryEdits {
    pub time_in: Option<NaiveTime>,
    pub time_out: Option<NaiveTime>,
    pub accomplishments: Option<String>,
    pub notes: Option<String>,
    /// present / late
    pub status: Option<EntryStatus>,
    pub toggle_absent: bool,
    pub toggle_holiday: bool,
}

impl EntryEdits {
    pub fn is_empty(&self) -> bool {
        self.time_in.is_none()
            && self.time_out.is_none()
            && self.accomplishments.is_none()
            && self.notes.is_none()
            && self.status.is_none()
            && !self.toggle_absent
            && !self.toggle_holiday
    }

    /// Flags first, so times are refused on a day just marked absent.
    fn apply<S: ReportStore>(&self, session: &mut ReportSession<'_, S>, date: NaiveDate) -> AppResult<()> {
        if self.toggle_absent {
            session.toggle_absent(date)?;
        }
        if self.toggle_holiday {
            session.toggle_holiday(date)?;
        }
        if self.status.is_some() {
            session.set_status(date, self.status)?;
        }
        if self.time_in.is_some() {
            session.set_time_in(date, self.time_in)?;
        }
        if self.time_out.is_some() {
            session.set_time_out(date, self.time_out)?;
        }
        if let Some(text) = &self.accomplishments {
            session.set_accomplishments(date, Some(text.clone()))?;
        }
        if let Some(notes) = &self.notes {
            session.set_additional_notes(date, Some(notes.clone()))?;
        }
        Ok(())
    }
}

pub struct EntryLogic;

impl EntryLogic {
    /// Apply the edits to one day, then confirm it or keep it as a draft.
    pub fn apply<S: ReportStore>(
        store: &mut S,
        report_id: i64,
        date: NaiveDate,
        edits: &EntryEdits,
        confirm: bool,
        policy: HourPolicy,
    ) -> AppResult<ReportEntry> {
        let mut session = ReportSession::load(store, report_id, policy)?;
        session.entry(date)?;

        edits.apply(&mut session, date)?;

        if confirm {
            let e = session.confirm(date)?;
            success(format!(
                "Entry {} confirmed ({} h).",
                e.entry_date,
                format_hours(e.total_hours)
            ));
        } else if !edits.is_empty() {
            let e = session.save_draft(date)?;
            info(format!(
                "Draft saved for {} ({} h). Confirm it with --confirm.",
                e.entry_date,
                format_hours(e.total_hours)
            ));
        } else {
            info(format!("Nothing to change for {}.", date));
        }

        Ok(session.entry(date)?.clone())
    }
}
