//! Program-wide statistics and per-module rows
//!
//! Builds the numbers shown on a student's academic overview from a
//! [`ProgramRecord`]: GPA, credits, average and best grades, standing.

use crate::core::grades::{self, Classification};
use crate::core::models::{Module, ProgramRecord};
use std::fmt;

/// Overall academic standing derived from the average completed-module grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcademicStanding {
    /// Average of 70 or above
    Distinction,
    /// Average of 60 to below 70
    Merit,
    /// Average of 50 to below 60
    Pass,
    /// Anything lower, including no completed modules yet
    InProgress,
}

impl AcademicStanding {
    /// Standing for an average percentage mark
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average >= 70.0 {
            Self::Distinction
        } else if average >= 60.0 {
            Self::Merit
        } else if average >= 50.0 {
            Self::Pass
        } else {
            Self::InProgress
        }
    }
}

impl fmt::Display for AcademicStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distinction => write!(f, "Distinction"),
            Self::Merit => write!(f, "Merit"),
            Self::Pass => write!(f, "Pass"),
            Self::InProgress => write!(f, "In Progress"),
        }
    }
}

/// Derived metrics for a single module
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleRow {
    /// Module code
    pub code: String,
    /// Module name
    pub name: String,
    /// Credit weight
    pub credits: u32,
    /// Whether the module is completed
    pub is_completed: bool,
    /// Zero-filled current mark
    pub final_mark: f64,
    /// Mark predicted from graded work only
    pub predicted_mark: f64,
    /// Fraction of assessments graded, in `[0, 1]`
    pub progress: f64,
    /// Number of graded assessments
    pub completed_assessments: usize,
    /// Number of assessments
    pub total_assessments: usize,
    /// GPA point of the final mark
    pub gpa_point: f64,
    /// Classification of the final mark
    pub classification: Classification,
}

impl ModuleRow {
    /// Compute every derived metric of a module
    #[must_use]
    pub fn from_module(module: &Module) -> Self {
        let final_mark = grades::final_mark(module);
        Self {
            code: module.code.clone(),
            name: module.name.clone(),
            credits: module.credits,
            is_completed: module.is_completed,
            final_mark,
            predicted_mark: grades::predicted_mark(module),
            progress: grades::progress_percentage(module),
            completed_assessments: grades::completed_assessments(module),
            total_assessments: grades::total_assessments(module),
            gpa_point: grades::gpa_point(final_mark),
            classification: grades::classification(final_mark),
        }
    }

    /// Status label used in exports and reports
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.is_completed {
            "Completed"
        } else {
            "In Progress"
        }
    }
}

/// Summary statistics for a program record
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSummary {
    /// Credit-weighted GPA over completed modules
    pub program_gpa: f64,
    /// Number of completed modules
    pub completed_modules: usize,
    /// Number of modules in the record
    pub total_modules: usize,
    /// Credits earned from completed modules
    pub completed_credits: u32,
    /// Credits across all modules
    pub total_credits: u32,
    /// Mean final mark of completed modules
    pub average_grade: f64,
    /// Best final mark among completed modules
    pub highest_grade: f64,
    /// Code of the module holding the best final mark
    pub highest_grade_module: String,
    /// Credit-weighted mean final mark of completed modules
    pub weighted_average: f64,
    /// Ungraded assessments across in-progress modules
    pub pending_assessments: usize,
    /// Classification of the average grade
    pub classification: Classification,
    /// Standing derived from the average grade
    pub standing: AcademicStanding,
}

impl ProgramSummary {
    /// Compute summary statistics for a record
    #[must_use]
    pub fn from_record(record: &ProgramRecord) -> Self {
        let mut completed_modules = 0;
        let mut completed_credits = 0u32;
        let mut mark_total = 0.0;
        let mut highest: Option<(f64, &str)> = None;
        let mut weighted_total = 0.0;
        let mut weighted_credits = 0u32;

        for module in record.completed() {
            let mark = grades::final_mark(module);
            completed_modules += 1;
            completed_credits = completed_credits.saturating_add(module.credits);
            mark_total += mark;

            if highest.is_none_or(|(best, _)| mark > best) {
                highest = Some((mark, module.code.as_str()));
            }

            if module.credits > 0 {
                weighted_total += mark * f64::from(module.credits);
                weighted_credits = weighted_credits.saturating_add(module.credits);
            }
        }

        #[allow(clippy::cast_precision_loss)]
        let average_grade = if completed_modules == 0 {
            0.0
        } else {
            mark_total / completed_modules as f64
        };

        let weighted_average = if weighted_credits == 0 {
            0.0
        } else {
            weighted_total / f64::from(weighted_credits)
        };

        let (highest_grade, highest_grade_module) =
            highest.map_or((0.0, String::new()), |(mark, code)| (mark, code.to_string()));

        let pending_assessments = record
            .in_progress()
            .map(|m| grades::total_assessments(m) - grades::completed_assessments(m))
            .sum();

        Self {
            program_gpa: grades::program_gpa(&record.modules),
            completed_modules,
            total_modules: record.modules.len(),
            completed_credits,
            total_credits: record
                .modules
                .iter()
                .fold(0u32, |acc, m| acc.saturating_add(m.credits)),
            average_grade,
            highest_grade,
            highest_grade_module,
            weighted_average,
            pending_assessments,
            classification: grades::classification(average_grade),
            standing: AcademicStanding::from_average(average_grade),
        }
    }
}

/// Derived rows for every module, in record order
#[must_use]
pub fn module_rows(record: &ProgramRecord) -> Vec<ModuleRow> {
    record.modules.iter().map(ModuleRow::from_module).collect()
}
