//! Report command handler
//!
//! Generates academic reports in Markdown or HTML from a program record.

use campus_grades::config::Config;
use campus_grades::core::record::load_record;
use campus_grades::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use campus_grades::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to the program record TOML file
/// * `output_file` - Optional output path
/// * `format` - Report format
/// * `config` - Configuration containing the default reports directory
pub fn run(input_file: &Path, output_file: Option<&Path>, format: ReportFormat, config: &Config) {
    if let Err(err) = generate_report(input_file, output_file, format, config) {
        error!(
            "Report generation failed for {}: {err}",
            input_file.display()
        );
        eprintln!("{err}");
    }
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<(), String> {
    let record = load_record(input_file)
        .map_err(|e| format!("✗ Failed to load {}: {e}", input_file.display()))?;

    let output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let stem = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("record");
        reports_dir.join(format!("{stem}_report.{}", format.extension()))
    };

    let ctx = ReportContext::new(&record);
    let result = match format {
        ReportFormat::Markdown => MarkdownReporter::new().generate(&ctx, &output_path),
        ReportFormat::Html => HtmlReporter::new().generate(&ctx, &output_path),
    };
    result.map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    println!(
        "Program GPA: {:.2} | {} of {} modules completed | {}",
        ctx.summary.program_gpa,
        ctx.summary.completed_modules,
        ctx.summary.total_modules,
        ctx.summary.classification
    );

    Ok(())
}
