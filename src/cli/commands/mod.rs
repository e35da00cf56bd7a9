//! CLI command handlers for `CampusGrades`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod report;
pub mod summary;
