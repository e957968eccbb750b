//! Course command handler
//!
//! Grade and unit flags arrive as raw text and are coerced here, the same way
//! a form field would be: blank grade means "no grade yet", an unknown grade
//! counts as F, and invalid units become 0.

use super::apply;
use crate::args::CourseSubcommand;
use cgpa_calc::core::aggregate::coerce_unit;
use cgpa_calc::core::grading::Grade;
use cgpa_calc::core::models::Course;
use cgpa_calc::core::record::{CourseDefaults, CourseEdit, Mutation};
use cgpa_calc::core::store::RecordStore;
use cgpa_calc::core::tracker::Tracker;

/// Dispatch course subcommands
///
/// `defaults` is the configured grade and unit for new courses.
///
/// # Errors
/// Returns a message if the semester or course does not exist or the record
/// cannot be saved.
pub fn run<S: RecordStore>(
    subcommand: CourseSubcommand,
    tracker: &mut Tracker<S>,
    defaults: CourseDefaults,
) -> Result<(), String> {
    match subcommand {
        CourseSubcommand::Add {
            semester_id,
            title,
            grade,
            unit,
            blank,
        } => {
            let base = if blank { CourseDefaults::BLANK } else { defaults };
            let added = add(tracker, semester_id, title, base)?;

            // Flag values override the defaults
            let edit = to_edit(None, grade, unit);
            let course = if edit.is_empty() {
                added
            } else {
                edit_course(tracker, added.0, added.1.id, edit)?
            };
            println!("✓ Added {}", describe(&course.1));
        }
        CourseSubcommand::Remove {
            semester_id,
            course_id,
        } => {
            let record = apply(
                tracker,
                Mutation::RemoveCourse {
                    semester_id,
                    course_id: course_id.clone(),
                },
            )?;
            println!("✓ Removed course {course_id} (CGPA now {:.2})", record.cgpa);
        }
        CourseSubcommand::Edit {
            semester_id,
            course_id,
            title,
            grade,
            unit,
        } => {
            let edit = to_edit(title, grade, unit);
            if edit.is_empty() {
                return Err("Nothing to change: pass --title, --grade or --unit".to_string());
            }
            let (_, course) = edit_course(tracker, semester_id, course_id, edit)?;
            println!("✓ Updated {}", describe(&course));
        }
    }
    Ok(())
}

fn add<S: RecordStore>(
    tracker: &mut Tracker<S>,
    semester_id: String,
    title: Option<String>,
    defaults: CourseDefaults,
) -> Result<(String, Course), String> {
    let record = apply(
        tracker,
        Mutation::AddCourse {
            semester_id: semester_id.clone(),
            title,
            defaults,
        },
    )?;
    record
        .semester(&semester_id)
        .and_then(|s| s.courses.last())
        .cloned()
        .map(|course| (semester_id, course))
        .ok_or_else(|| "Course was not added".to_string())
}

fn edit_course<S: RecordStore>(
    tracker: &mut Tracker<S>,
    semester_id: String,
    course_id: String,
    edit: CourseEdit,
) -> Result<(String, Course), String> {
    let record = apply(
        tracker,
        Mutation::EditCourse {
            semester_id: semester_id.clone(),
            course_id: course_id.clone(),
            edit,
        },
    )?;
    record
        .semester(&semester_id)
        .and_then(|s| s.course(&course_id))
        .cloned()
        .map(|course| (semester_id, course))
        .ok_or_else(|| format!("Course {course_id} disappeared after editing"))
}

/// Build an edit from raw flag text
pub fn to_edit(title: Option<String>, grade: Option<String>, unit: Option<String>) -> CourseEdit {
    CourseEdit {
        title,
        grade: grade.as_deref().map(Grade::coerce),
        unit: unit.as_deref().map(coerce_unit),
    }
}

fn describe(course: &Course) -> String {
    let grade = course.grade.map_or("-", |g| g.letter());
    format!(
        "{} (id {}, grade {grade}, {} units)",
        course.title, course.id, course.unit
    )
}
