//! Export program metrics to various formats

use super::models::ProgramRecord;
use super::summary::{module_rows, ModuleRow, ProgramSummary};
use std::error::Error;
use std::path::Path;

/// Trait for exporting program metrics in different formats
pub trait RecordExporter {
    /// Export metrics for a program record
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, record: &ProgramRecord, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// CSV exporter for program metrics
pub struct CsvExporter;

impl RecordExporter for CsvExporter {
    fn export(&self, record: &ProgramRecord, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let summary = ProgramSummary::from_record(record);
        export_record_csv_with_summary(record, &summary, output_path)
    }
}

/// Quote a free-text CSV field, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Export program metrics to CSV with summary statistics
///
/// The file starts with one summary item per row, followed by a `Modules`
/// marker, a column header and one row per module in record order.
///
/// # Arguments
/// * `record` - The program record to export
/// * `summary` - Summary statistics for the record
/// * `output_path` - Path to write the CSV file to
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_record_csv_with_summary(
    record: &ProgramRecord,
    summary: &ProgramSummary,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    use std::fs::File;
    use std::io::Write;

    let mut file = File::create(output_path)?;

    writeln!(file, "Program,{}", quote(&record.program))?;
    writeln!(
        file,
        "Student,{}",
        quote(record.student.as_deref().unwrap_or(""))
    )?;
    writeln!(file, "Program GPA,{:.2}", summary.program_gpa)?;
    writeln!(
        file,
        "Completed Modules,{},{}",
        summary.completed_modules, summary.total_modules
    )?;
    writeln!(
        file,
        "Completed Credits,{},{}",
        summary.completed_credits, summary.total_credits
    )?;
    writeln!(file, "Average Grade,{:.1}", summary.average_grade)?;
    writeln!(file, "Weighted Average,{:.1}", summary.weighted_average)?;
    writeln!(
        file,
        "Highest Grade,{:.1},{}",
        summary.highest_grade,
        quote(&summary.highest_grade_module)
    )?;
    writeln!(file, "Pending Assessments,{}", summary.pending_assessments)?;
    writeln!(file, "Classification,{}", summary.classification.label())?;
    writeln!(file, "Standing,{}", summary.standing)?;

    writeln!(file, "Modules")?;
    writeln!(
        file,
        "Code,Name,Credits,Status,Final Mark,Predicted Mark,Progress,Graded,Assessments,GPA Point,Classification"
    )?;

    let rows = module_rows(record);
    crate::debug!("Exporting {} modules from record", rows.len());

    for row in &rows {
        write_module_row(&mut file, row)?;
    }

    Ok(())
}

/// Write a single module row
fn write_module_row(out: &mut impl std::io::Write, row: &ModuleRow) -> std::io::Result<()> {
    writeln!(
        out,
        "{},{},{},{},{:.1},{:.1},{:.2},{},{},{:.1},{}",
        quote(&row.code),
        quote(&row.name),
        row.credits,
        row.status(),
        row.final_mark,
        row.predicted_mark,
        row.progress,
        row.completed_assessments,
        row.total_assessments,
        row.gpa_point,
        row.classification.label()
    )
}

/// Convenience function to export metrics using the default CSV exporter
///
/// Returns the computed summary statistics for further use
///
/// # Errors
/// Returns an error if file writing fails
pub fn export_record_csv<P: AsRef<Path>>(
    record: &ProgramRecord,
    output_path: P,
) -> Result<ProgramSummary, Box<dyn Error>> {
    let summary = ProgramSummary::from_record(record);
    export_record_csv_with_summary(record, &summary, output_path.as_ref())?;
    Ok(summary)
}
