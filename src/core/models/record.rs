//! Academic record model: the top-level aggregate of semesters

use crate::core::aggregate;
use crate::core::grading::Classification;
use crate::core::models::Semester;
use serde::{Deserialize, Serialize};

/// One point of the GPA trend: a semester's GPA labeled by its name, paired
/// with the record's current CGPA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaSnapshot {
    /// Semester name at the time of the last recompute
    pub semester: String,
    /// That semester's GPA
    pub gpa: f64,
    /// The record's CGPA (identical across all snapshots)
    pub cgpa: f64,
}

/// A student's full academic record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcademicRecord {
    /// Semesters in display order
    #[serde(default)]
    pub semesters: Vec<Semester>,

    /// Derived CGPA across all semesters
    #[serde(default)]
    pub cgpa: f64,

    /// Derived trend, one entry per semester in current order
    #[serde(default, rename = "gpaHistory")]
    pub gpa_history: Vec<GpaSnapshot>,

    /// Next identifier to hand out; rebuilt from existing ids after loading
    #[serde(skip)]
    pub(crate) next_id: u64,
}

// Equality covers the persisted content only, not the id counter.
impl PartialEq for AcademicRecord {
    fn eq(&self, other: &Self) -> bool {
        self.semesters == other.semesters
            && self.cgpa.to_bits() == other.cgpa.to_bits()
            && self.gpa_history == other.gpa_history
    }
}

impl Default for AcademicRecord {
    fn default() -> Self {
        Self::empty()
    }
}

impl AcademicRecord {
    /// A record with no semesters
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            semesters: Vec::new(),
            cgpa: 0.0,
            gpa_history: Vec::new(),
            next_id: 1,
        }
    }

    /// The starting state for a new user: one empty semester named "Semester 1"
    #[must_use]
    pub fn fresh() -> Self {
        let mut record = Self::empty();
        let id = record.next_id();
        record
            .semesters
            .push(Semester::new(id, "Semester 1".to_string()));
        record.recompute();
        record
    }

    /// Recompute every derived field bottom-up: each semester's GPA, then the
    /// CGPA, then the history. Running it twice yields identical values.
    pub fn recompute(&mut self) {
        for semester in &mut self.semesters {
            semester.recompute_gpa();
        }
        self.cgpa = aggregate::calculate_cgpa(&self.semesters);
        self.gpa_history = self
            .semesters
            .iter()
            .map(|semester| GpaSnapshot {
                semester: semester.name.clone(),
                gpa: semester.gpa,
                cgpa: self.cgpa,
            })
            .collect();
    }

    /// Sum of every course unit across all semesters (display only)
    #[must_use]
    pub fn total_units(&self) -> u64 {
        aggregate::total_units(&self.semesters)
    }

    /// Degree classification for the current CGPA
    #[must_use]
    pub fn classification(&self) -> Classification {
        Classification::from_cgpa(self.cgpa)
    }

    /// Total number of courses across all semesters
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.semesters.iter().map(|s| s.courses.len()).sum()
    }

    /// Find a semester by id
    #[must_use]
    pub fn semester(&self, semester_id: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.id == semester_id)
    }

    /// Find a semester by id for editing
    pub fn semester_mut(&mut self, semester_id: &str) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.id == semester_id)
    }

    /// Hand out the next identifier
    pub(crate) fn next_id(&mut self) -> String {
        let id = self.next_id;
        self.next_id += 1;
        id.to_string()
    }

    /// Move the id counter past every numeric id already in the record, so
    /// loaded records (including timestamp-style ids) never get a collision.
    pub(crate) fn reseed_ids(&mut self) {
        let highest = self
            .semesters
            .iter()
            .flat_map(|s| std::iter::once(&s.id).chain(s.courses.iter().map(|c| &c.id)))
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(highest.saturating_add(1));
    }
}
