//! Integration tests for GPA, CGPA and classification

use cgpa_calc::core::aggregate::{calculate_cgpa, calculate_gpa, total_units};
use cgpa_calc::core::grading::{Classification, Grade};
use cgpa_calc::core::models::{AcademicRecord, Course, Semester};

fn course(id: &str, grade: Option<Grade>, unit: u32) -> Course {
    Course::new(id.to_string(), format!("Course {id}"), grade, unit)
}

fn semester(id: &str, courses: Vec<Course>) -> Semester {
    let mut semester = Semester::new(id.to_string(), format!("Semester {id}"));
    semester.courses = courses;
    semester.recompute_gpa();
    semester
}

fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

#[test]
fn gpa_of_no_courses_is_zero() {
    assert!(approx(calculate_gpa(&[]), 0.0));
}

#[test]
fn gpa_of_zero_unit_courses_is_zero() {
    let courses = vec![course("1", Some(Grade::A), 0), course("2", Some(Grade::C), 0)];
    assert!(approx(calculate_gpa(&courses), 0.0));
}

#[test]
fn gpa_is_units_weighted() {
    let courses = vec![course("1", Some(Grade::A), 3), course("2", Some(Grade::B), 2)];
    assert!(approx(calculate_gpa(&courses), 4.6));
}

#[test]
fn cgpa_weights_semesters_by_units() {
    let first = semester(
        "1",
        (1..=5)
            .map(|i| course(&i.to_string(), Some(Grade::B), 3))
            .collect(),
    );
    let second = semester(
        "2",
        (6..=9)
            .map(|i| course(&i.to_string(), Some(Grade::C), 3))
            .collect(),
    );
    assert!(approx(first.gpa, 4.0));
    assert!(approx(second.gpa, 3.0));
    assert_eq!(first.graded_units(), 15);
    assert_eq!(second.graded_units(), 12);

    assert!(approx(calculate_cgpa(&[first, second]), 3.56));
}

#[test]
fn zero_unit_and_ungraded_courses_are_invisible_to_both_averages() {
    let with_extras = semester(
        "1",
        vec![
            course("1", Some(Grade::A), 3),
            course("2", Some(Grade::F), 0),
            course("3", None, 6),
        ],
    );
    let plain = semester("2", vec![course("4", Some(Grade::C), 3)]);

    assert!(approx(with_extras.gpa, 5.0));
    assert!(approx(calculate_cgpa(&[with_extras.clone(), plain.clone()]), 4.0));
    // Display total still counts every unit
    assert_eq!(total_units(&[with_extras, plain]), 12);
}

#[test]
fn classification_boundaries_are_lower_inclusive() {
    assert_eq!(
        Classification::from_cgpa(3.50).label(),
        "Second Class Upper"
    );
    assert_eq!(
        Classification::from_cgpa(3.49).label(),
        "Second Class Lower"
    );
    assert_eq!(Classification::from_cgpa(4.50), Classification::FirstClass);
    assert_eq!(Classification::from_cgpa(2.50), Classification::SecondClassLower);
    assert_eq!(Classification::from_cgpa(1.50), Classification::ThirdClass);
    assert_eq!(Classification::from_cgpa(1.49), Classification::Fail);
}

#[test]
fn recompute_is_idempotent() {
    let mut record = AcademicRecord::empty();
    record.semesters = vec![
        semester(
            "1",
            vec![
                course("3", Some(Grade::A), 3),
                course("4", Some(Grade::E), 2),
                course("5", Some(Grade::C), 1),
            ],
        ),
        semester(
            "2",
            vec![course("6", Some(Grade::B), 4), course("7", Some(Grade::D), 3)],
        ),
    ];
    record.recompute();
    let once = record.clone();
    record.recompute();

    assert_eq!(record.cgpa.to_bits(), once.cgpa.to_bits());
    for (a, b) in record.semesters.iter().zip(&once.semesters) {
        assert_eq!(a.gpa.to_bits(), b.gpa.to_bits());
    }
    assert_eq!(record, once);
}

#[test]
fn history_tracks_semester_order_and_names() {
    let mut record = AcademicRecord::empty();
    record.semesters = vec![
        semester("1", vec![course("3", Some(Grade::A), 2)]),
        semester("2", vec![course("4", Some(Grade::C), 2)]),
    ];
    record.recompute();

    let labels: Vec<&str> = record
        .gpa_history
        .iter()
        .map(|p| p.semester.as_str())
        .collect();
    assert_eq!(labels, ["Semester 1", "Semester 2"]);
    assert!(record.gpa_history.iter().all(|p| approx(p.cgpa, record.cgpa)));
    assert!(approx(record.cgpa, 4.0));
}
