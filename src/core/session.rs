//! One report being worked on: materialized entries, gated edits,
//! confirmation and submission.
//!
//! Edits are applied in memory. Only `confirm`, `save_draft`, `submit` and
//! `review` reach the store, and local state changes only after the store
//! call succeeded.

use crate::core::calculator::hours::HourPolicy;
use crate::core::gate;
use crate::core::materializer::materialize;
use crate::core::mutator;
use crate::core::store::ReportStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryId, ReportEntry};
use crate::models::entry_status::EntryStatus;
use crate::models::report::{Report, ReviewDecision};
use chrono::{NaiveDate, NaiveTime};

pub struct ReportSession<'s, S: ReportStore> {
    store: &'s mut S,
    report: Report,
    entries: Vec<ReportEntry>,
    policy: HourPolicy,
}

impl<'s, S: ReportStore> ReportSession<'s, S> {
    /// Fetch a report and materialize its full day list.
    pub fn load(store: &'s mut S, report_id: i64, policy: HourPolicy) -> AppResult<Self> {
        let (report, persisted) = store.fetch_report(report_id)?;
        let entries = materialize(report.start_date, report.end_date, &persisted, report.id);
        let entries = mutator::recompute_all(entries, &policy);

        let mut session = Self {
            store,
            report,
            entries,
            policy,
        };
        session.refresh_total();
        Ok(session)
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &*self.store
    }

    pub fn entry(&self, date: NaiveDate) -> AppResult<&ReportEntry> {
        self.entries
            .iter()
            .find(|e| e.entry_date == date)
            .ok_or(AppError::EntryNotFound(date))
    }

    fn refresh_total(&mut self) {
        self.report.total_hours = Report::period_total(&self.entries);
    }

    /// Gate, then run a pure mutator on the day's entry.
    ///
    /// Editing a confirmed entry (only possible on a rejected report) drops
    /// its confirmation: it has to be confirmed again before resubmitting.
    fn edit<F>(&mut self, date: NaiveDate, times: bool, f: F) -> AppResult<()>
    where
        F: FnOnce(Vec<ReportEntry>, &EntryId) -> Vec<ReportEntry>,
    {
        let entry = self.entry(date)?;
        if times {
            gate::ensure_times_editable(self.report.status, entry)?;
        } else {
            gate::ensure_editable(self.report.status, entry)?;
        }
        let id = entry.id;
        let reopened = entry.is_confirmed;

        let entries = std::mem::take(&mut self.entries);
        self.entries = f(entries, &id);

        if reopened && let Some(e) = self.entries.iter_mut().find(|e| e.id == id) {
            e.is_confirmed = false;
        }

        self.refresh_total();
        Ok(())
    }

    pub fn set_time_in(&mut self, date: NaiveDate, value: Option<NaiveTime>) -> AppResult<()> {
        let policy = self.policy;
        self.edit(date, true, |es, id| mutator::set_time_in(es, id, value, &policy))
    }

    pub fn set_time_out(&mut self, date: NaiveDate, value: Option<NaiveTime>) -> AppResult<()> {
        let policy = self.policy;
        self.edit(date, true, |es, id| mutator::set_time_out(es, id, value, &policy))
    }

    pub fn set_accomplishments(&mut self, date: NaiveDate, value: Option<String>) -> AppResult<()> {
        self.edit(date, false, |es, id| mutator::set_accomplishments(es, id, value))
    }

    pub fn set_additional_notes(&mut self, date: NaiveDate, value: Option<String>) -> AppResult<()> {
        self.edit(date, false, |es, id| mutator::set_additional_notes(es, id, value))
    }

    pub fn set_status(&mut self, date: NaiveDate, value: Option<EntryStatus>) -> AppResult<()> {
        if value.is_some_and(|s| s.excuses_times()) {
            // absent / holiday are flags: route them through the toggles
            return match value {
                Some(EntryStatus::Absent) if self.entry(date)?.status != value => {
                    self.toggle_absent(date)
                }
                Some(EntryStatus::Holiday) if self.entry(date)?.status != value => {
                    self.toggle_holiday(date)
                }
                _ => Ok(()),
            };
        }
        self.edit(date, false, |es, id| mutator::set_status(es, id, value))
    }

    pub fn toggle_absent(&mut self, date: NaiveDate) -> AppResult<()> {
        self.edit(date, false, mutator::toggle_absent)
    }

    pub fn toggle_holiday(&mut self, date: NaiveDate) -> AppResult<()> {
        self.edit(date, false, mutator::toggle_holiday)
    }

    fn replace(&mut self, stored: ReportEntry) {
        if let Some(slot) = self
            .entries
            .iter_mut()
            .find(|e| e.entry_date == stored.entry_date)
        {
            *slot = stored;
        }
        self.refresh_total();
    }

    /// unconfirmed → confirmed, persisted. A gate failure never reaches the
    /// store; a store failure leaves the entry unconfirmed.
    pub fn confirm(&mut self, date: NaiveDate) -> AppResult<&ReportEntry> {
        let entry = self.entry(date)?;
        gate::check_confirmable(self.report.status, entry)?;

        if !entry.is_confirmed {
            let mut candidate = entry.clone();
            candidate.is_confirmed = true;

            let stored = self.store.persist_entry(&candidate)?;
            self.replace(stored);
        }

        self.entry(date)
    }

    /// Persist the day unconfirmed so edits survive between invocations.
    pub fn save_draft(&mut self, date: NaiveDate) -> AppResult<&ReportEntry> {
        let entry = self.entry(date)?;
        gate::ensure_editable(self.report.status, entry)?;
        let draft = entry.clone();

        let stored = self.store.persist_entry(&draft)?;
        self.replace(stored);
        self.entry(date)
    }

    /// * → pending. Needs every day confirmed and the signature flag.
    pub fn submit(&mut self, signed: bool) -> AppResult<&Report> {
        gate::check_submittable(self.report.status, &self.entries, signed)?;

        let receipt = self.store.persist_submission(self.report.id)?;
        self.report.status = receipt.status;
        self.report.submitted_at = Some(receipt.submitted_at);
        Ok(&self.report)
    }

    /// pending → approved | rejected (reviewer side).
    pub fn review(&mut self, decision: ReviewDecision, remarks: Option<String>) -> AppResult<&Report> {
        let target = decision.target_status();
        gate::check_reviewable(self.report.status, target)?;

        let reviewed_at = self
            .store
            .persist_review(self.report.id, decision, remarks.as_deref())?;

        self.report.status = target;
        self.report.remarks = remarks;
        if decision == ReviewDecision::Approve {
            self.report.supervisor_approved_at = Some(reviewed_at);
        }
        Ok(&self.report)
    }
}
