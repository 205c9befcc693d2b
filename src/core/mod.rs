pub mod calculator;
pub mod entry;
pub mod gate;
pub mod import;
pub mod log;
pub mod materializer;
pub mod mutator;
pub mod report;
pub mod session;
pub mod store;
pub mod submit;
