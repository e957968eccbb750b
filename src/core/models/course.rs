//! Course model

use crate::core::aggregate::lenient_unit;
use crate::core::grading::{optional_letter, Grade};
use serde::{Deserialize, Serialize};

/// A single course taken in a semester
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Identifier, unique within the owning record
    pub id: String,

    /// Course title (e.g., "MTH 101 - Elementary Mathematics")
    #[serde(default)]
    pub title: String,

    /// Letter grade; `None` until the student enters one
    #[serde(default, with = "optional_letter")]
    pub grade: Option<Grade>,

    /// Credit units. Zero-unit courses are kept but never averaged.
    #[serde(default, deserialize_with = "lenient_unit::deserialize")]
    pub unit: u32,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `id` - Identifier from the record's id generator
    /// * `title` - Course title
    /// * `grade` - Letter grade, or `None` when not yet graded
    /// * `unit` - Credit units
    #[must_use]
    pub const fn new(id: String, title: String, grade: Option<Grade>, unit: u32) -> Self {
        Self {
            id,
            title,
            grade,
            unit,
        }
    }

    /// Whether this course counts toward GPA and CGPA: it must carry a grade
    /// and a non-zero unit.
    #[must_use]
    pub const fn qualifies(&self) -> bool {
        self.grade.is_some() && self.unit > 0
    }

    /// Grade points times units, or `None` when the course does not qualify
    #[must_use]
    pub fn weighted_points(&self) -> Option<f64> {
        match self.grade {
            Some(grade) if self.unit > 0 => Some(grade.points() * f64::from(self.unit)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "1".to_string(),
            "Introduction to Computing".to_string(),
            Some(Grade::A),
            3,
        );

        assert_eq!(course.id, "1");
        assert_eq!(course.title, "Introduction to Computing");
        assert_eq!(course.grade, Some(Grade::A));
        assert_eq!(course.unit, 3);
        assert!(course.qualifies());
    }

    #[test]
    fn test_weighted_points() {
        let course = Course::new("1".to_string(), "Physics".to_string(), Some(Grade::B), 2);
        assert_eq!(course.weighted_points(), Some(8.0));
    }

    #[test]
    fn test_zero_unit_does_not_qualify() {
        let course = Course::new("1".to_string(), "Seminar".to_string(), Some(Grade::A), 0);
        assert!(!course.qualifies());
        assert!(course.weighted_points().is_none());
    }

    #[test]
    fn test_ungraded_does_not_qualify() {
        let course = Course::new("1".to_string(), "Lab".to_string(), None, 3);
        assert!(!course.qualifies());
        assert!(course.weighted_points().is_none());
    }

    #[test]
    fn test_grade_serialized_as_letter() {
        let graded = Course::new("7".to_string(), "Chemistry".to_string(), Some(Grade::C), 4);
        let json = serde_json::to_string(&graded).expect("serialize course");
        assert_eq!(
            json,
            r#"{"id":"7","title":"Chemistry","grade":"C","unit":4}"#
        );

        let blank = Course::new("8".to_string(), "Course 2".to_string(), None, 0);
        let json = serde_json::to_string(&blank).expect("serialize course");
        assert!(json.contains(r#""grade":"""#));
    }

    #[test]
    fn test_unknown_grade_loads_as_f() {
        let course: Course =
            serde_json::from_str(r#"{"id":"1","title":"X","grade":"P","unit":2}"#)
                .expect("deserialize course");
        assert_eq!(course.grade, Some(Grade::F));
    }

    #[test]
    fn test_out_of_range_unit_loads_as_zero() {
        let course: Course =
            serde_json::from_str(r#"{"id":"1","title":"X","grade":"B","unit":-2}"#)
                .expect("deserialize course");
        assert_eq!(course.unit, 0);
        assert!(!course.qualifies());

        let course: Course = serde_json::from_str(r#"{"id":"2","unit":null}"#)
            .expect("deserialize course");
        assert_eq!(course.unit, 0);

        let course: Course = serde_json::from_str(r#"{"id":"3"}"#).expect("deserialize course");
        assert_eq!(course.unit, 0);
    }
}
