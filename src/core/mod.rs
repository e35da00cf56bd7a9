//! Core grade computation, record handling and output

pub mod config;
pub mod export;
pub mod grades;
pub mod models;
pub mod record;
pub mod report;
pub mod summary;

/// Returns the current version of the `CampusGrades` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
