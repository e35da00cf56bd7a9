//! HTML report generator
//!
//! Generates academic reports as a self-contained HTML page with embedded
//! CSS, rendered through an askama template.

use crate::core::grades::Classification;
use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::summary::ModuleRow;
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Module row with every value preformatted for display
struct HtmlModuleRow {
    code: String,
    name: String,
    credits: u32,
    status: &'static str,
    final_mark: String,
    predicted_mark: String,
    progress_pct: String,
    graded: String,
    gpa_point: String,
    classification: &'static str,
    band_class: &'static str,
}

impl HtmlModuleRow {
    fn from_row(row: &ModuleRow) -> Self {
        Self {
            code: row.code.clone(),
            name: row.name.clone(),
            credits: row.credits,
            status: row.status(),
            final_mark: format!("{:.1}", row.final_mark),
            predicted_mark: format!("{:.1}", row.predicted_mark),
            progress_pct: format!("{:.0}", row.progress * 100.0),
            graded: format!("{}/{}", row.completed_assessments, row.total_assessments),
            gpa_point: format!("{:.1}", row.gpa_point),
            classification: row.classification.label(),
            band_class: band_class(row.classification),
        }
    }
}

/// CSS class used to color a classification band
const fn band_class(classification: Classification) -> &'static str {
    match classification {
        Classification::First => "band-first",
        Classification::UpperSecond => "band-upper",
        Classification::LowerSecond => "band-lower",
        Classification::ThirdOrPass => "band-third",
    }
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate<'a> {
    program_name: &'a str,
    student_name: &'a str,
    program_gpa: String,
    average_grade: String,
    weighted_average: String,
    completed_credits: u32,
    total_credits: u32,
    completed_modules: usize,
    total_modules: usize,
    highest_grade: String,
    pending_assessments: usize,
    classification: String,
    standing: String,
    rows: Vec<HtmlModuleRow>,
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build_template<'a>(ctx: &'a ReportContext) -> HtmlReportTemplate<'a> {
        let summary = &ctx.summary;
        let highest_grade = if summary.highest_grade_module.is_empty() {
            "N/A".to_string()
        } else {
            format!(
                "{:.1} ({})",
                summary.highest_grade, summary.highest_grade_module
            )
        };

        HtmlReportTemplate {
            program_name: ctx.program_name(),
            student_name: ctx.student_name(),
            program_gpa: format!("{:.2}", summary.program_gpa),
            average_grade: format!("{:.1}", summary.average_grade),
            weighted_average: format!("{:.1}", summary.weighted_average),
            completed_credits: summary.completed_credits,
            total_credits: summary.total_credits,
            completed_modules: summary.completed_modules,
            total_modules: summary.total_modules,
            highest_grade,
            pending_assessments: summary.pending_assessments,
            classification: summary.classification.to_string(),
            standing: summary.standing.to_string(),
            rows: ctx.rows.iter().map(HtmlModuleRow::from_row).collect(),
        }
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::build_template(ctx).render()?)
    }
}
