pub mod diagnose;
pub mod extract;
pub mod output;
pub mod runtime;
pub mod scrape;
pub mod targets;
pub mod types;
