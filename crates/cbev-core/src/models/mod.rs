//! Data models: canonical records, verification outcomes, configuration.

pub mod config;
pub mod outcome;
pub mod transaction;
