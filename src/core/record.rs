//! Mutation protocol for an [`AcademicRecord`]
//!
//! Every change is a pure step `(old record, Mutation) -> new record`. The new
//! record is always fully recomputed (semester GPAs, CGPA, history), never
//! patched incrementally.

use crate::core::grading::Grade;
use crate::core::models::{AcademicRecord, Course, Semester};
use logger::debug;
use thiserror::Error;

/// Errors raised when a mutation targets something that does not exist
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// No semester with this id
    #[error("No semester with id '{0}'")]
    SemesterNotFound(String),

    /// No course with this id in the given semester
    #[error("No course with id '{course_id}' in semester '{semester_id}'")]
    CourseNotFound {
        /// Semester that was searched
        semester_id: String,
        /// Course that was not found
        course_id: String,
    },
}

/// Grade and unit given to a newly added course
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseDefaults {
    /// Initial grade (`None` for the blank variant)
    pub grade: Option<Grade>,
    /// Initial credit units (`0` for the blank variant)
    pub unit: u32,
}

impl CourseDefaults {
    /// Grade `A`, 3 units
    pub const STANDARD: Self = Self {
        grade: Some(Grade::A),
        unit: 3,
    };

    /// No grade, 0 units
    pub const BLANK: Self = Self {
        grade: None,
        unit: 0,
    };
}

impl Default for CourseDefaults {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Field edits for one course; `None` leaves a field as it is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseEdit {
    /// New title
    pub title: Option<String>,
    /// New grade; `Some(None)` clears the grade
    pub grade: Option<Option<Grade>>,
    /// New credit units
    pub unit: Option<u32>,
}

impl CourseEdit {
    /// Whether this edit changes nothing
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.grade.is_none() && self.unit.is_none()
    }

    fn apply_to(self, course: &mut Course) {
        if let Some(title) = self.title {
            course.title = title;
        }
        if let Some(grade) = self.grade {
            course.grade = grade;
        }
        if let Some(unit) = self.unit {
            course.unit = unit;
        }
    }
}

/// A single change to an academic record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Append a semester; defaults to "Semester N"
    AddSemester {
        /// Optional name
        name: Option<String>,
    },
    /// Delete a semester and all of its courses
    RemoveSemester {
        /// Target semester
        semester_id: String,
    },
    /// Rename a semester
    RenameSemester {
        /// Target semester
        semester_id: String,
        /// New name
        name: String,
    },
    /// Append a course to a semester; defaults to "Course N"
    AddCourse {
        /// Target semester
        semester_id: String,
        /// Optional title
        title: Option<String>,
        /// Initial grade and units
        defaults: CourseDefaults,
    },
    /// Delete a course
    RemoveCourse {
        /// Owning semester
        semester_id: String,
        /// Target course
        course_id: String,
    },
    /// Change fields of a course in place
    EditCourse {
        /// Owning semester
        semester_id: String,
        /// Target course
        course_id: String,
        /// Fields to change
        edit: CourseEdit,
    },
    /// Delete every course in a semester
    ClearCourses {
        /// Target semester
        semester_id: String,
    },
}

impl AcademicRecord {
    /// Apply a mutation and return the recomputed record. `self` is untouched.
    ///
    /// # Errors
    /// Returns [`RecordError`] when the mutation names a semester or course
    /// that does not exist.
    ///
    /// # Examples
    /// ```
    /// use cgpa_calc::core::models::AcademicRecord;
    /// use cgpa_calc::core::record::{CourseDefaults, Mutation};
    ///
    /// let record = AcademicRecord::fresh();
    /// let semester_id = record.semesters[0].id.clone();
    /// let record = record
    ///     .apply(Mutation::AddCourse {
    ///         semester_id,
    ///         title: None,
    ///         defaults: CourseDefaults::STANDARD,
    ///     })
    ///     .unwrap();
    /// assert!((record.cgpa - 5.0).abs() < 1e-9);
    /// ```
    pub fn apply(&self, mutation: Mutation) -> Result<Self, RecordError> {
        let mut next = self.clone();
        next.apply_in_place(mutation)?;
        next.recompute();
        debug!(
            "Record recomputed: {} semesters, CGPA {:.2}",
            next.semesters.len(),
            next.cgpa
        );
        Ok(next)
    }

    fn apply_in_place(&mut self, mutation: Mutation) -> Result<(), RecordError> {
        match mutation {
            Mutation::AddSemester { name } => {
                let name = name
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or_else(|| format!("Semester {}", self.semesters.len() + 1));
                let id = self.next_id();
                debug!("Adding semester {id} ({name})");
                self.semesters.push(Semester::new(id, name));
            }
            Mutation::RemoveSemester { semester_id } => {
                let pos = self
                    .semesters
                    .iter()
                    .position(|s| s.id == semester_id)
                    .ok_or_else(|| RecordError::SemesterNotFound(semester_id.clone()))?;
                debug!("Removing semester {semester_id}");
                self.semesters.remove(pos);
            }
            Mutation::RenameSemester { semester_id, name } => {
                self.find_semester(&semester_id)?.name = name;
            }
            Mutation::AddCourse {
                semester_id,
                title,
                defaults,
            } => {
                let id = self.next_id();
                let semester = self.find_semester(&semester_id)?;
                let title = title
                    .filter(|t| !t.trim().is_empty())
                    .unwrap_or_else(|| format!("Course {}", semester.courses.len() + 1));
                debug!("Adding course {id} ({title}) to semester {semester_id}");
                semester
                    .courses
                    .push(Course::new(id, title, defaults.grade, defaults.unit));
            }
            Mutation::RemoveCourse {
                semester_id,
                course_id,
            } => {
                if !self.find_semester(&semester_id)?.remove_course(&course_id) {
                    return Err(RecordError::CourseNotFound {
                        semester_id,
                        course_id,
                    });
                }
            }
            Mutation::EditCourse {
                semester_id,
                course_id,
                edit,
            } => {
                let course = self
                    .find_semester(&semester_id)?
                    .course_mut(&course_id)
                    .ok_or_else(|| RecordError::CourseNotFound {
                        semester_id: semester_id.clone(),
                        course_id: course_id.clone(),
                    })?;
                edit.apply_to(course);
            }
            Mutation::ClearCourses { semester_id } => {
                self.find_semester(&semester_id)?.courses.clear();
            }
        }
        Ok(())
    }

    fn find_semester(&mut self, semester_id: &str) -> Result<&mut Semester, RecordError> {
        self.semester_mut(semester_id)
            .ok_or_else(|| RecordError::SemesterNotFound(semester_id.to_string()))
    }
}
