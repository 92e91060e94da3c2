//! Posts unlogged timesheet rows to Jira as work logs.
//! The binary is a thin wrapper; everything lives here so integration tests
//! can drive the row loop without a network.

pub mod config;
pub mod errors;
pub mod jira;
pub mod sheet;
pub mod sync;
pub mod times;
