//! Integration tests for record persistence

use cgpa_calc::core::grading::Grade;
use cgpa_calc::core::models::AcademicRecord;
use cgpa_calc::core::record::{CourseDefaults, CourseEdit, Mutation};
use cgpa_calc::core::store::{deserialize, load_or_fresh, serialize, JsonFileStore, RecordStore};
use cgpa_calc::core::tracker::Tracker;
use std::fs;
use tempfile::TempDir;

fn sample_record() -> AcademicRecord {
    let mut record = AcademicRecord::fresh()
        .apply(Mutation::AddSemester {
            name: Some("100L Second".to_string()),
        })
        .expect("add semester");

    for (index, grade) in [(0, Some(Grade::A)), (0, None), (1, Some(Grade::E))] {
        let semester_id = record.semesters[index].id.clone();
        record = record
            .apply(Mutation::AddCourse {
                semester_id: semester_id.clone(),
                title: None,
                defaults: CourseDefaults::STANDARD,
            })
            .expect("add course");
        let course_id = record.semesters[index]
            .courses
            .last()
            .map(|c| c.id.clone())
            .expect("course added");
        record = record
            .apply(Mutation::EditCourse {
                semester_id,
                course_id,
                edit: CourseEdit {
                    grade: Some(grade),
                    ..CourseEdit::default()
                },
            })
            .expect("edit course");
    }
    record
}

#[test]
fn serialize_round_trip_reproduces_record() {
    let record = sample_record();
    let text = serialize(&record).expect("serialize");
    assert_eq!(deserialize(&text), Some(record));
}

#[test]
fn unset_grade_is_stored_as_empty_string() {
    let text = serialize(&sample_record()).expect("serialize");
    assert!(text.contains("\"grade\": \"\""));
    assert!(text.contains("\"grade\": \"A\""));
}

#[test]
fn file_store_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("data").join("record.json");
    let mut store = JsonFileStore::new(&path);
    assert!(store.load().expect("load empty").is_none());

    let record = sample_record();
    store.save(&record).expect("save");
    assert!(path.exists());

    let loaded = store.load().expect("load").expect("record present");
    assert_eq!(loaded, record);

    // Only the target file remains after the atomic replace
    let entries: Vec<_> = fs::read_dir(path.parent().expect("parent"))
        .expect("read dir")
        .collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn malformed_file_falls_back_to_fresh_record() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("record.json");
    fs::write(&path, "{ \"semesters\": [ oops").expect("write");

    let store = JsonFileStore::new(&path);
    assert!(store.load().is_err());

    let record = load_or_fresh(&store);
    assert_eq!(record.semesters.len(), 1);
    assert_eq!(record.semesters[0].name, "Semester 1");
}

#[test]
fn blank_file_is_an_empty_store() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("record.json");
    fs::write(&path, "  \n").expect("write");
    assert!(JsonFileStore::new(&path).load().expect("load").is_none());
}

#[test]
fn tracker_persists_every_mutation_to_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("record.json");

    let mut tracker = Tracker::open(JsonFileStore::new(&path));
    assert!(!path.exists());
    let semester_id = tracker.semesters()[0].id.clone();
    tracker
        .apply(Mutation::AddCourse {
            semester_id: semester_id.clone(),
            title: Some("CSC 101".to_string()),
            defaults: CourseDefaults::STANDARD,
        })
        .expect("add course");
    assert!(path.exists());

    tracker
        .apply(Mutation::RemoveSemester { semester_id })
        .expect("remove semester");
    assert!(!tracker.last_save_failed());

    let reopened = Tracker::open(JsonFileStore::new(&path));
    assert!(reopened.semesters().is_empty());
    assert!(reopened.cgpa().abs() < f64::EPSILON);
}

#[test]
fn out_of_range_units_keep_the_document() {
    let text = r#"{
        "semesters": [{
            "id": "1", "name": "100L First", "gpa": 0,
            "courses": [
                {"id": "2", "title": "MTH 101", "grade": "B", "unit": -2},
                {"id": "3", "title": "PHY 101", "grade": "A", "unit": null},
                {"id": "4", "title": "CHM 101", "grade": "C", "unit": 3}
            ]
        }],
        "cgpa": 0,
        "gpaHistory": []
    }"#;

    let record = deserialize(text).expect("document still loads");
    let units: Vec<u32> = record.semesters[0].courses.iter().map(|c| c.unit).collect();
    assert_eq!(units, vec![0, 0, 3]);
    assert!((record.cgpa - 3.0).abs() < 1e-9);

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("record.json");
    fs::write(&path, text).expect("write");
    let reopened = load_or_fresh(&JsonFileStore::new(&path));
    assert_eq!(reopened.semesters.len(), 1);
    assert_eq!(reopened.semesters[0].name, "100L First");
    assert_eq!(reopened.course_count(), 3);
}
