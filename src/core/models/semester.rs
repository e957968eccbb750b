//! Semester model

use crate::core::aggregate;
use crate::core::models::Course;
use serde::{Deserialize, Serialize};

/// A semester: an ordered list of courses plus its derived GPA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Identifier, unique within the owning record
    pub id: String,

    /// Display name (e.g., "Semester 1", "200L Harmattan")
    #[serde(default)]
    pub name: String,

    /// Courses in display order
    #[serde(default)]
    pub courses: Vec<Course>,

    /// Derived GPA. Overwritten whenever `courses` changes; never edit directly.
    #[serde(default)]
    pub gpa: f64,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            courses: Vec::new(),
            gpa: 0.0,
        }
    }

    /// Recompute `gpa` from the current courses
    pub fn recompute_gpa(&mut self) {
        self.gpa = aggregate::calculate_gpa(&self.courses);
    }

    /// Units that take part in averaging (graded, non-zero unit courses)
    #[must_use]
    pub fn graded_units(&self) -> u64 {
        aggregate::graded_units(&self.courses)
    }

    /// Every unit in the semester, graded or not
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.unit)).sum()
    }

    /// Find a course by id
    #[must_use]
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Find a course by id for editing
    pub fn course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    /// Remove a course by id
    ///
    /// # Returns
    /// `true` if the course was removed, `false` if it wasn't in the semester
    pub fn remove_course(&mut self, course_id: &str) -> bool {
        if let Some(pos) = self.courses.iter().position(|c| c.id == course_id) {
            self.courses.remove(pos);
            true
        } else {
            false
        }
    }
}
