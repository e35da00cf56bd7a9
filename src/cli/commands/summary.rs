//! Summary command handler

use campus_grades::config::Config;
use campus_grades::core::export::export_record_csv_with_summary;
use campus_grades::core::models::ProgramRecord;
use campus_grades::core::record::load_record;
use campus_grades::core::summary::{module_rows, ProgramSummary};
use campus_grades::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Run the summary command for one or more program records.
///
/// # Arguments
/// * `input_files` - Paths to program record TOML files
/// * `output_files` - Optional CSV output paths; must match inputs 1:1 when provided
/// * `no_csv` - Print the summary without writing CSV files
/// * `config` - Configuration containing the default exports directory
pub fn run(input_files: &[PathBuf], output_files: &[PathBuf], no_csv: bool, config: &Config) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = summarize_single(input_file, output_file, no_csv, config) {
            error!("Summary failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

fn summarize_single(
    input_file: &Path,
    output_file: Option<&Path>,
    no_csv: bool,
    config: &Config,
) -> Result<(), String> {
    let record = load_record(input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;

    verbose!("✓ Record loaded from: {}", input_file.display());

    let summary = ProgramSummary::from_record(&record);
    print_summary(&record, &summary);

    if no_csv {
        return Ok(());
    }

    let output_path = match output_file {
        Some(output) => output.to_path_buf(),
        None => default_output_path(input_file, config)?,
    };

    export_record_csv_with_summary(&record, &summary, &output_path).map_err(|e| {
        format!(
            "✗ Failed to export grades to {}: {e}",
            output_path.display()
        )
    })?;

    println!("✓ Grades exported to: {}", output_path.display());
    info!("Exported program grades to: {}", output_path.display());
    Ok(())
}

/// `<exports_dir>/<input stem>_grades.csv`, creating the directory if needed
fn default_output_path(input_file: &Path, config: &Config) -> Result<PathBuf, String> {
    let exports_dir = PathBuf::from(&config.paths.exports_dir);
    std::fs::create_dir_all(&exports_dir).map_err(|e| {
        format!(
            "✗ Failed to create exports directory {}: {e}",
            exports_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("record");
    Ok(exports_dir.join(format!("{stem}_grades.csv")))
}

fn print_summary(record: &ProgramRecord, summary: &ProgramSummary) {
    let program = if record.program.is_empty() {
        "Program"
    } else {
        &record.program
    };
    match record.student.as_deref() {
        Some(student) => println!("\n=== {program} ({student}) ==="),
        None => println!("\n=== {program} ==="),
    }

    println!("Program GPA: {:.2}", summary.program_gpa);
    println!(
        "Completed: {} of {} modules, {} of {} credits",
        summary.completed_modules,
        summary.total_modules,
        summary.completed_credits,
        summary.total_credits
    );
    println!(
        "Average Grade: {:.1} ({})",
        summary.average_grade, summary.standing
    );
    println!("Weighted Average: {:.1}", summary.weighted_average);
    if !summary.highest_grade_module.is_empty() {
        println!(
            "Highest Grade: {:.1} ({})",
            summary.highest_grade, summary.highest_grade_module
        );
    }
    println!("Pending Assessments: {}", summary.pending_assessments);
    println!("Classification: {}", summary.classification);

    println!();
    for row in module_rows(record) {
        println!(
            "  {:<10} {:<11} final {:>5.1}  predicted {:>5.1}  progress {:>3.0}%  GPA {:.1}",
            row.code,
            row.status(),
            row.final_mark,
            row.predicted_mark,
            row.progress * 100.0,
            row.gpa_point
        );
    }
}
