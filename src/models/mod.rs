pub mod entry;
pub mod entry_status;
pub mod report;
pub mod report_kind;
pub mod report_status;
pub mod student;
