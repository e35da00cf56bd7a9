//! Report generation module for academic transcripts
//!
//! This module renders a program record, its summary statistics and the
//! per-module metrics into Markdown or HTML reports.

pub mod formats;

use crate::core::models::ProgramRecord;
use crate::core::summary::{module_rows, ModuleRow, ProgramSummary};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Aggregates everything a report template needs so renderers never
/// recompute metrics themselves.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Record being reported
    pub record: &'a ProgramRecord,
    /// Summary statistics
    pub summary: ProgramSummary,
    /// Derived metrics per module, in record order
    pub rows: Vec<ModuleRow>,
}

impl<'a> ReportContext<'a> {
    /// Build a report context, computing summary and module rows
    #[must_use]
    pub fn new(record: &'a ProgramRecord) -> Self {
        Self {
            record,
            summary: ProgramSummary::from_record(record),
            rows: module_rows(record),
        }
    }

    /// Get the program title or a default
    #[must_use]
    pub fn program_name(&self) -> &str {
        if self.record.program.is_empty() {
            "Program"
        } else {
            &self.record.program
        }
    }

    /// Get the student name or a placeholder
    #[must_use]
    pub fn student_name(&self) -> &str {
        self.record.student.as_deref().unwrap_or("-")
    }

    /// Rows for completed modules
    pub fn completed_rows(&self) -> impl Iterator<Item = &ModuleRow> {
        self.rows.iter().filter(|r| r.is_completed)
    }

    /// Rows for in-progress modules
    pub fn in_progress_rows(&self) -> impl Iterator<Item = &ModuleRow> {
        self.rows.iter().filter(|r| !r.is_completed)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
