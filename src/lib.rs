//! Academic performance aggregation for `CampusGrades`
//!
//! Computes module marks, progress, GPA points and degree classification
//! from a student's program record, and backs the `campusgrades` CLI.

pub mod core;
pub mod logger;

pub use self::core::grades::{
    classification, completed_assessments, final_mark, gpa_point, predicted_mark, program_gpa,
    progress_percentage, total_assessments, Classification,
};
pub use self::core::models::{Assessment, Module, ProgramRecord, Score};
pub use self::core::{config, get_version};
