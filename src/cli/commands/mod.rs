pub mod config;
pub mod db;
pub mod entry;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod report;
pub mod review;
pub mod submit;
