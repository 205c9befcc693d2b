use crate::core::calculator::hours::HourPolicy;
use crate::core::session::ReportSession;
use crate::core::store::ReportStore;
use crate::errors::AppResult;
use crate::models::report::{Report, ReviewDecision};
use crate::ui::messages::{success, warning};

pub struct SubmitLogic;

impl SubmitLogic {
    /// Trainee side: every day confirmed + signature → pending.
    pub fn apply<S: ReportStore>(
        store: &mut S,
        report_id: i64,
        signed: bool,
        policy: HourPolicy,
    ) -> AppResult<Report> {
        let mut session = ReportSession::load(store, report_id, policy)?;
        let report = session.submit(signed)?;

        success(format!(
            "Report #{} submitted for review ({:.2} h).",
            report.id, report.total_hours
        ));
        Ok(report.clone())
    }
}

pub struct ReviewLogic;

impl ReviewLogic {
    /// Reviewer side: pending → approved | rejected.
    pub fn apply<S: ReportStore>(
        store: &mut S,
        report_id: i64,
        decision: ReviewDecision,
        remarks: Option<String>,
        policy: HourPolicy,
    ) -> AppResult<Report> {
        let mut session = ReportSession::load(store, report_id, policy)?;
        let report = session.review(decision, remarks)?;

        match decision {
            ReviewDecision::Approve => success(format!("Report #{} approved.", report.id)),
            ReviewDecision::Reject => warning(format!(
                "Report #{} rejected: entries are open for editing again.",
                report.id
            )),
        }
        Ok(report.clone())
    }
}
