//! Markdown report generator
//!
//! Generates academic reports as Markdown tables. These render well in
//! GitHub, GitLab and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::core::summary::ModuleRow;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report by filling the template's placeholders
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let summary = &ctx.summary;
        fill_placeholders(MARKDOWN_TEMPLATE, |key| {
            let value = match key {
                "program_name" => ctx.program_name().to_string(),
                "student_name" => ctx.student_name().to_string(),
                "program_gpa" => format!("{:.2}", summary.program_gpa),
                "completed_modules" => summary.completed_modules.to_string(),
                "total_modules" => summary.total_modules.to_string(),
                "completed_credits" => summary.completed_credits.to_string(),
                "total_credits" => summary.total_credits.to_string(),
                "average_grade" => format!("{:.1}", summary.average_grade),
                "weighted_average" => format!("{:.1}", summary.weighted_average),
                "highest_grade" if summary.highest_grade_module.is_empty() => "N/A".to_string(),
                "highest_grade" => format!(
                    "{:.1} ({})",
                    summary.highest_grade,
                    table_cell(&summary.highest_grade_module)
                ),
                "pending_assessments" => summary.pending_assessments.to_string(),
                "classification" => summary.classification.to_string(),
                "standing" => summary.standing.to_string(),
                "completed_modules_table" => Self::generate_module_table(ctx.completed_rows()),
                "in_progress_modules_table" => {
                    Self::generate_module_table(ctx.in_progress_rows())
                }
                _ => return None,
            };
            Some(value)
        })
    }

    /// Generate a module metrics table
    fn generate_module_table<'r>(rows: impl Iterator<Item = &'r ModuleRow>) -> String {
        let mut table = String::new();
        let mut rows = rows.peekable();

        if rows.peek().is_none() {
            table.push_str("_None_\n");
            return table;
        }

        table.push_str(
            "| Code | Name | Credits | Final | Predicted | Progress | GPA Point | Class |\n",
        );
        table.push_str("|---|---|---|---|---|---|---|---|\n");

        for row in rows {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.1} | {:.1} | {}/{} | {:.1} | {} |",
                table_cell(&row.code),
                table_cell(&row.name),
                row.credits,
                row.final_mark,
                row.predicted_mark,
                row.completed_assessments,
                row.total_assessments,
                row.gpa_point,
                row.classification.label()
            );
        }

        table
    }
}

/// Replace each `{{key}}` in `template` with `lookup(key)` in a single pass
///
/// Substituted text is never scanned again. Unknown keys are left as written.
fn fill_placeholders(template: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match lookup(key) {
            Some(value) => output.push_str(&value),
            None => {
                output.push_str("{{");
                output.push_str(key);
                output.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    output
}

/// Escape text for use inside a Markdown table cell
fn table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
