//! TOML parser for program records

use crate::core::models::ProgramRecord;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Tolerance used when checking whether a module's weights add up to 100
const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Errors raised while loading a program record
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record file could not be read
    #[error("Failed to read record: {0}")]
    Io(#[from] std::io::Error),
    /// The record is not valid TOML or does not match the expected layout
    #[error("Invalid record: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parse a program record from a TOML string
///
/// Assessments without a `score` are loaded as ungraded. Weights are not
/// validated; modules whose weights do not sum to 100 are only logged.
///
/// # Errors
/// Returns [`RecordError::Parse`] if the TOML is malformed or a required
/// field (module `name`, `code`, `credits`, assessment `weight`) is missing.
pub fn parse_record_toml(toml_str: &str) -> Result<ProgramRecord, RecordError> {
    let record: ProgramRecord = toml::from_str(toml_str)?;

    for module in &record.modules {
        let total = module.total_weight();
        if !module.assessments.is_empty() && (total - 100.0).abs() > WEIGHT_TOLERANCE {
            crate::warn!(
                "Module {} assessment weights sum to {total}, not 100",
                module.code
            );
        }
    }

    crate::debug!(
        "Parsed record '{}' with {} modules",
        record.program,
        record.modules.len()
    );

    Ok(record)
}

/// Load a program record from a TOML file
///
/// # Arguments
/// * `path` - Path to the record file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<ProgramRecord, RecordError> {
    let content = fs::read_to_string(path.as_ref())?;
    let record = parse_record_toml(&content)?;
    crate::info!("Record loaded: {}", path.as_ref().display());
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Score;

    const SAMPLE: &str = r#"
student = "Alex Chen"
program = "MSc Health Data Science"

[[modules]]
name = "Epidemiology for Health Data Science"
code = "HDAT0003"
credits = 15
completed = true

[[modules.assessments]]
name = "Essay"
weight = 40
score = 75.0

[[modules.assessments]]
name = "Final Exam"
weight = 60
score = 70.0

[[modules]]
name = "Natural Language Processing in Healthcare"
code = "HDAT0010"
credits = 15

[[modules.assessments]]
name = "NLP Coursework"
weight = 60

[[modules.assessments]]
name = "Final Exam"
weight = 40
"#;

    #[test]
    fn parses_sample_record() {
        let record = parse_record_toml(SAMPLE).expect("parse record");

        assert_eq!(record.student.as_deref(), Some("Alex Chen"));
        assert_eq!(record.program, "MSc Health Data Science");
        assert_eq!(record.modules.len(), 2);

        let epi = &record.modules[0];
        assert!(epi.is_completed);
        assert_eq!(epi.credits, 15);
        assert_eq!(epi.assessments[0].score, Score::Graded(75.0));

        let nlp = &record.modules[1];
        assert!(!nlp.is_completed);
        assert!(nlp.assessments.iter().all(|a| a.score == Score::Ungraded));
    }

    #[test]
    fn integer_scores_are_accepted() {
        let record = parse_record_toml(
            r#"
program = "MSc"

[[modules]]
name = "Stats"
code = "HDAT0001"
credits = 15

[[modules.assessments]]
weight = 100
score = 68
"#,
        )
        .expect("parse record");

        assert_eq!(record.modules[0].assessments[0].score, Score::Graded(68.0));
        assert!(record.modules[0].assessments[0].name.is_empty());
    }

    #[test]
    fn uneven_weights_are_kept_as_given() {
        let record = parse_record_toml(
            r#"
program = "MSc"

[[modules]]
name = "Short Module"
code = "SHRT0001"
credits = 15
completed = true

[[modules.assessments]]
weight = 30
score = 100.0

[[modules.assessments]]
weight = 30
score = 100.0
"#,
        )
        .expect("uneven weights still load");

        assert!((record.modules[0].total_weight() - 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_record_toml("[[modules]\nname = ").expect_err("should fail");
        assert!(matches!(err, RecordError::Parse(_)));
    }

    #[test]
    fn rejects_module_without_code() {
        let err = parse_record_toml(
            r#"
[[modules]]
name = "No Code"
credits = 15
"#,
        )
        .expect_err("missing code should fail");
        assert!(matches!(err, RecordError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_record("samples/records/does_not_exist.toml").expect_err("should fail");
        assert!(matches!(err, RecordError::Io(_)));
        assert!(err.to_string().starts_with("Failed to read record"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
