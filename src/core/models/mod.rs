//! Data models for `CampusGrades`

pub mod assessment;
pub mod module;
pub mod program;

pub use assessment::{Assessment, Score};
pub use module::Module;
pub use program::ProgramRecord;
