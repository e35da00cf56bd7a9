//! Integration smoke tests for `campus_grades`

use campus_grades::{final_mark, get_version, Assessment, Module};

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn root_reexports_cover_the_grade_api() {
    let module = Module::new("Essay Module".to_string(), "HDAT0003".to_string(), 15)
        .with_assessment(Assessment::graded("Essay", 100.0, 60.0));
    assert!((final_mark(&module) - 60.0).abs() < 1e-9);
}
