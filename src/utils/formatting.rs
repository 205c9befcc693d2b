//! Formatting utilities used for CLI outputs.

use crate::models::entry_status::EntryStatus;
use crate::models::report_status::ReportStatus;
use crate::utils::colors::{BLUE, CYAN, GREEN, GREY, MAGENTA, RED, RESET, YELLOW};

/// Label and ANSI colour for a day status.
pub fn describe_status(status: Option<EntryStatus>) -> (String, &'static str) {
    match status {
        Some(EntryStatus::Present) => ("present".into(), GREEN),
        Some(EntryStatus::Late) => ("late".into(), YELLOW),
        Some(EntryStatus::Absent) => ("absent".into(), RED),
        Some(EntryStatus::Holiday) => ("holiday".into(), MAGENTA),
        None => ("--".into(), GREY),
    }
}

pub fn colorize_report_status(status: ReportStatus) -> String {
    let color = match status {
        ReportStatus::NotSubmitted => GREY,
        ReportStatus::Pending => CYAN,
        ReportStatus::Approved => GREEN,
        ReportStatus::Rejected => RED,
    };
    format!("{color}{status}{RESET}")
}

pub fn confirmed_mark(is_confirmed: bool) -> String {
    if is_confirmed {
        format!("{GREEN}✔{RESET}")
    } else {
        format!("{BLUE}·{RESET}")
    }
}

/// Cut a free-text field to `max` visible characters.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Remove ANSI escape sequences (for width calculations).
pub fn strip_ansi(s: &str) -> String {
    static ANSI: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
    let re = ANSI.get_or_init(|| regex::Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}
