pub mod config;
pub mod error;
pub mod label;
pub mod metrics;
pub mod records;
pub mod report;
