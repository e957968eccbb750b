//! Integration tests for the mutation protocol and the tracker

use cgpa_calc::core::grading::{Classification, Grade};
use cgpa_calc::core::models::AcademicRecord;
use cgpa_calc::core::record::{CourseDefaults, CourseEdit, Mutation, RecordError};
use cgpa_calc::core::store::MemoryStore;
use cgpa_calc::core::tracker::Tracker;

fn add_graded_course(
    tracker: &mut Tracker<MemoryStore>,
    semester_id: &str,
    grade: Grade,
    unit: u32,
) -> String {
    tracker
        .apply(Mutation::AddCourse {
            semester_id: semester_id.to_string(),
            title: None,
            defaults: CourseDefaults {
                grade: Some(grade),
                unit,
            },
        })
        .expect("add course")
        .semester(semester_id)
        .and_then(|s| s.courses.last())
        .map(|c| c.id.clone())
        .expect("course present")
}

#[test]
fn first_open_starts_with_one_empty_semester() {
    let tracker = Tracker::open(MemoryStore::new());
    assert_eq!(tracker.semesters().len(), 1);
    assert_eq!(tracker.semesters()[0].name, "Semester 1");
    assert!(tracker.semesters()[0].courses.is_empty());
    assert!(tracker.cgpa().abs() < f64::EPSILON);
}

#[test]
fn deleting_the_last_semester_resets_everything() {
    let mut tracker = Tracker::open(MemoryStore::new());
    let semester_id = tracker.semesters()[0].id.clone();
    add_graded_course(&mut tracker, &semester_id, Grade::A, 3);
    assert!((tracker.cgpa() - 5.0).abs() < 1e-9);

    tracker
        .apply(Mutation::RemoveSemester { semester_id })
        .expect("remove semester");

    assert!(tracker.cgpa().abs() < f64::EPSILON);
    assert_eq!(tracker.total_units(), 0);
    assert_eq!(tracker.classification(), Classification::Fail);
    assert_eq!(tracker.classification().label(), "Fail");
    assert!(tracker.history().is_empty());

    // The empty record is persisted, so reopening does not resurrect the
    // deleted semester
    let saved = tracker.store().document().expect("saved").to_string();
    let reopened = Tracker::open(MemoryStore::with_document(saved));
    assert!(reopened.semesters().is_empty());
}

#[test]
fn every_mutation_keeps_derived_values_consistent() {
    let mut tracker = Tracker::open(MemoryStore::new());
    let first = tracker.semesters()[0].id.clone();
    let course_a = add_graded_course(&mut tracker, &first, Grade::A, 3);
    add_graded_course(&mut tracker, &first, Grade::B, 2);
    assert!((tracker.semesters()[0].gpa - 4.6).abs() < 1e-9);

    tracker
        .apply(Mutation::AddSemester {
            name: Some("200L First".to_string()),
        })
        .expect("add semester");
    let second = tracker.semesters()[1].id.clone();
    add_graded_course(&mut tracker, &second, Grade::D, 5);

    // (5*3 + 4*2 rounded to 4.60 over 5 units) and 2.00 over 5 units
    assert!((tracker.cgpa() - 3.3).abs() < 1e-9);
    assert_eq!(tracker.history().len(), 2);
    assert_eq!(tracker.history()[1].semester, "200L First");

    tracker
        .apply(Mutation::EditCourse {
            semester_id: first.clone(),
            course_id: course_a.clone(),
            edit: CourseEdit {
                grade: Some(None),
                ..CourseEdit::default()
            },
        })
        .expect("clear grade");
    // Ungraded course drops out: 4.00 over 2 units and 2.00 over 5 units
    assert!((tracker.semesters()[0].gpa - 4.0).abs() < 1e-9);
    assert!((tracker.cgpa() - 2.57).abs() < 1e-9);
    assert_eq!(tracker.total_units(), 10);

    tracker
        .apply(Mutation::RemoveCourse {
            semester_id: first,
            course_id: course_a,
        })
        .expect("remove course");
    assert_eq!(tracker.total_units(), 7);

    let record = tracker.record().clone();
    let mut recomputed = record.clone();
    recomputed.recompute();
    assert_eq!(recomputed, record);
}

#[test]
fn unknown_ids_leave_the_record_untouched() {
    let mut tracker = Tracker::open(MemoryStore::new());
    let before: AcademicRecord = tracker.record().clone();

    let err = tracker
        .apply(Mutation::RenameSemester {
            semester_id: "404".to_string(),
            name: "Ghost".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, RecordError::SemesterNotFound("404".to_string()));
    assert_eq!(tracker.record(), &before);
    assert!(tracker.store().document().is_none());
}

#[test]
fn ids_stay_unique_after_reload() {
    let mut tracker = Tracker::open(MemoryStore::new());
    let semester_id = tracker.semesters()[0].id.clone();
    add_graded_course(&mut tracker, &semester_id, Grade::C, 2);
    let saved = tracker.store().document().expect("saved").to_string();

    let mut reopened = Tracker::open(MemoryStore::with_document(saved));
    let new_course = add_graded_course(&mut reopened, &semester_id, Grade::C, 2);
    let ids: Vec<&str> = reopened.semesters()[0]
        .courses
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
    assert_ne!(new_course, semester_id);
}
