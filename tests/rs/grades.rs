//! Integration tests for module marks, GPA and classification.

use campus_grades::{
    classification, completed_assessments, final_mark, gpa_point, predicted_mark, program_gpa,
    progress_percentage, total_assessments, Assessment, Classification, Module, Score,
};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}

fn module(code: &str, credits: u32, assessments: &[(f64, Option<f64>)]) -> Module {
    let mut module = Module::new(format!("{code} module"), code.to_string(), credits);
    for (idx, (weight, score)) in assessments.iter().enumerate() {
        let name = format!("Assessment {}", idx + 1);
        module.add_assessment(match score {
            Some(score) => Assessment::graded(name, *weight, *score),
            None => Assessment::ungraded(name, *weight),
        });
    }
    module
}

#[test]
fn module_without_assessments_is_all_zero() {
    let m = module("HDAT0099", 15, &[]);

    assert!(final_mark(&m).abs() < EPS);
    assert!(predicted_mark(&m).abs() < EPS);
    assert!(progress_percentage(&m).abs() < EPS);
    assert_eq!(total_assessments(&m), 0);
}

#[test]
fn fully_graded_module() {
    let m = module("HDAT0001", 15, &[(40.0, Some(80.0)), (60.0, Some(70.0))]);

    assert_close(final_mark(&m), 74.0);
    assert_close(predicted_mark(&m), 74.0);
    assert_close(progress_percentage(&m), 1.0);
    assert_eq!(completed_assessments(&m), 2);
}

#[test]
fn partially_graded_module() {
    let m = module("HDAT0011", 15, &[(50.0, Some(90.0)), (50.0, None)]);

    assert_close(final_mark(&m), 45.0);
    assert_close(predicted_mark(&m), 90.0);
    assert_close(progress_percentage(&m), 0.5);
}

#[test]
fn overweight_module_is_clamped() {
    let m = module("HDAT0002", 15, &[(80.0, Some(100.0)), (80.0, Some(100.0))]);

    assert_close(final_mark(&m), 100.0);
}

#[test]
fn ungraded_module_predicts_zero() {
    let m = module("HDAT0012", 15, &[(40.0, None), (30.0, None), (30.0, None)]);

    assert!(predicted_mark(&m).abs() < EPS);
    assert!(progress_percentage(&m).abs() < EPS);
}

#[test]
fn gpa_band_boundaries() {
    assert_close(gpa_point(70.0), 4.0);
    assert_close(gpa_point(69.999), 3.0);
    assert_close(gpa_point(60.0), 3.0);
    assert_close(gpa_point(50.0), 2.0);
    assert_close(gpa_point(40.0), 1.0);
    assert_close(gpa_point(39.999), 0.0);
}

#[test]
fn program_gpa_weights_completed_modules_by_credit() {
    let modules = vec![
        module("A", 20, &[(100.0, Some(75.0))]).completed(true),
        module("B", 15, &[(100.0, Some(55.0))]).completed(true),
        module("C", 30, &[(100.0, Some(90.0))]),
    ];

    // (4.0 * 20 + 2.0 * 15) / 35
    assert_close(program_gpa(&modules), 110.0 / 35.0);
}

#[test]
fn program_gpa_without_completed_modules_is_zero() {
    let modules = vec![module("A", 15, &[(100.0, Some(90.0))])];

    assert!(program_gpa(&modules).abs() < EPS);
    assert!(program_gpa(&Vec::<Module>::new()).abs() < EPS);
}

#[test]
fn recomputation_is_stable() {
    let m = module("HDAT0004", 15, &[(50.0, None), (30.0, Some(78.0)), (20.0, None)]);

    assert_eq!(final_mark(&m).to_bits(), final_mark(&m).to_bits());
    assert_eq!(predicted_mark(&m).to_bits(), predicted_mark(&m).to_bits());
}

#[test]
fn grading_an_assessment_moves_the_marks() {
    let mut m = module("HDAT0004", 15, &[(50.0, None), (30.0, Some(78.0)), (20.0, None)]);
    assert_close(final_mark(&m), 23.4);

    m.get_assessment_mut("Assessment 1")
        .expect("assessment exists")
        .set_score(60.0);

    assert_close(final_mark(&m), 53.4);
    assert_close(predicted_mark(&m), 53.4 / 0.8);
    assert_eq!(m.assessments[0].score, Score::Graded(60.0));
}

#[test]
fn classification_boundaries() {
    assert_eq!(classification(70.0), Classification::First);
    assert_eq!(classification(69.99), Classification::UpperSecond);
    assert_eq!(classification(50.0), Classification::LowerSecond);
    assert_eq!(classification(49.99), Classification::ThirdOrPass);
}
