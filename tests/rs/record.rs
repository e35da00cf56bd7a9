//! Integration tests over the bundled sample record: loading, summary,
//! CSV export and reports.

use campus_grades::core::export::{export_record_csv, CsvExporter, RecordExporter};
use campus_grades::core::record::{load_record, parse_record_toml, RecordError};
use campus_grades::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use campus_grades::core::summary::{AcademicStanding, ProgramSummary};
use campus_grades::logger::{close_file_logging, init_file_logging};
use campus_grades::{final_mark, Classification, ProgramRecord, Score};
use std::fs;

const SAMPLE_PATH: &str = "samples/records/hdat_msc.toml";

fn sample() -> ProgramRecord {
    load_record(SAMPLE_PATH).expect("sample record loads")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn sample_record_loads_every_module() {
    let record = sample();

    assert_eq!(record.program, "MSc Health Data Science");
    assert_eq!(record.student.as_deref(), Some("Alex Chen"));
    assert_eq!(record.modules.len(), 8);
    assert_eq!(record.completed().count(), 4);

    let hdat0004 = record.get_module("HDAT0004").expect("HDAT0004 present");
    assert_eq!(hdat0004.assessments[0].score, Score::Ungraded);
    assert_eq!(hdat0004.assessments[1].score, Score::Graded(78.0));
}

#[test]
fn sample_final_marks() {
    let record = sample();
    let mark = |code: &str| final_mark(record.get_module(code).expect("module present"));

    assert_close(mark("HDAT0001"), 68.9);
    assert_close(mark("HDAT0003"), 72.0);
    assert_close(mark("HDAT0005"), 64.7);
    assert_close(mark("HDAT0007"), 71.4);
}

#[test]
fn sample_summary() {
    let summary = ProgramSummary::from_record(&sample());

    assert_eq!(summary.completed_modules, 4);
    assert_eq!(summary.total_modules, 8);
    assert_eq!(summary.completed_credits, 60);
    assert_eq!(summary.total_credits, 120);
    assert_eq!(summary.highest_grade_module, "HDAT0003");
    assert_close(summary.highest_grade, 72.0);
    assert_close(summary.average_grade, 69.25);
    assert_close(summary.weighted_average, 69.25);
    assert_close(summary.program_gpa, 3.5);
    assert_eq!(summary.pending_assessments, 9);
    assert_eq!(summary.classification, Classification::UpperSecond);
    assert_eq!(summary.standing, AcademicStanding::Merit);
}

#[test]
fn malformed_record_is_parse_error() {
    let result = parse_record_toml("[[modules]]\nname = \"Missing code\"\ncredits = 15\n");
    assert!(matches!(result, Err(RecordError::Parse(_))));
}

#[test]
fn uneven_weights_are_logged_but_kept() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("record.log");
    assert!(init_file_logging(&log_path));

    let result = parse_record_toml(
        r#"
program = "MSc"

[[modules]]
name = "Short Module"
code = "SHRT0001"
credits = 15

[[modules.assessments]]
weight = 30
score = 80.0

[[modules.assessments]]
weight = 30
"#,
    );
    close_file_logging();

    let record = result.expect("uneven weights still load");
    assert_eq!(record.modules[0].assessments.len(), 2);

    let log = fs::read_to_string(&log_path).expect("read log");
    assert!(log.contains("[WARN] Module SHRT0001 assessment weights sum to 60, not 100"));
}

#[test]
fn csv_export_has_summary_and_module_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hdat_msc_grades.csv");

    let summary = export_record_csv(&sample(), &path).expect("export csv");
    assert_eq!(summary.completed_modules, 4);

    let csv = fs::read_to_string(&path).expect("read csv");
    assert!(csv.starts_with("Program,\"MSc Health Data Science\""));
    assert!(csv.contains("Program GPA,3.50"));
    assert!(csv.contains("Completed Credits,60"));
    assert!(csv.contains("Code,Name,Credits,Status,Final Mark"));
    let module_lines = csv.lines().filter(|l| l.starts_with("\"HDAT")).count();
    assert_eq!(module_lines, 8);
}

#[test]
fn exporter_trait_writes_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out.csv");

    CsvExporter.export(&sample(), &path).expect("export csv");
    assert!(path.exists());
}

#[test]
fn reports_name_program_and_every_module() {
    let record = sample();
    let ctx = ReportContext::new(&record);
    let dir = tempfile::tempdir().expect("tempdir");

    let md_path = dir.path().join("report.md");
    MarkdownReporter::new()
        .generate(&ctx, &md_path)
        .expect("markdown report");
    let html = HtmlReporter::new().render(&ctx).expect("html report");
    let md = fs::read_to_string(&md_path).expect("read markdown");

    for report in [&md, &html] {
        assert!(report.contains("MSc Health Data Science"));
        for module in &record.modules {
            assert!(report.contains(&module.code), "missing {}", module.code);
        }
    }
}
