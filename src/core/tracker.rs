//! The in-memory owner of an academic record
//!
//! A [`Tracker`] holds the current record and an injected [`RecordStore`].
//! Each mutation replaces the record with a recomputed one and then saves it.
//! A failed save is logged and otherwise ignored: the in-memory record stays
//! authoritative.

use crate::core::grading::Classification;
use crate::core::models::{AcademicRecord, GpaSnapshot, Semester};
use crate::core::record::{Mutation, RecordError};
use crate::core::store::{load_or_fresh, RecordStore};
use logger::{error, info};

/// Current record plus the store it is persisted to
#[derive(Debug)]
pub struct Tracker<S: RecordStore> {
    record: AcademicRecord,
    store: S,
    last_save_failed: bool,
}

impl<S: RecordStore> Tracker<S> {
    /// Load the record from `store`, or start fresh with one empty semester
    pub fn open(store: S) -> Self {
        let record = load_or_fresh(&store);
        info!(
            "Opened record with {} semesters (CGPA {:.2})",
            record.semesters.len(),
            record.cgpa
        );
        Self {
            record,
            store,
            last_save_failed: false,
        }
    }

    /// Apply a mutation, replace the current record and persist it.
    ///
    /// # Errors
    /// Returns [`RecordError`] if the mutation targets a missing semester or
    /// course; the current record is then left unchanged and nothing is saved.
    pub fn apply(&mut self, mutation: Mutation) -> Result<&AcademicRecord, RecordError> {
        self.record = self.record.apply(mutation)?;
        self.persist();
        Ok(&self.record)
    }

    /// Save the current record without changing it
    pub fn persist(&mut self) {
        match self.store.save(&self.record) {
            Ok(()) => self.last_save_failed = false,
            Err(e) => {
                error!("Failed to save record: {e}");
                self.last_save_failed = true;
            }
        }
    }

    /// Whether the most recent save attempt failed
    #[must_use]
    pub const fn last_save_failed(&self) -> bool {
        self.last_save_failed
    }

    /// Read-only view of the record
    #[must_use]
    pub const fn record(&self) -> &AcademicRecord {
        &self.record
    }

    /// Semesters in display order
    #[must_use]
    pub fn semesters(&self) -> &[Semester] {
        &self.record.semesters
    }

    /// Current CGPA
    #[must_use]
    pub const fn cgpa(&self) -> f64 {
        self.record.cgpa
    }

    /// Every unit across all courses (display only)
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.record.total_units()
    }

    /// Degree classification for the current CGPA
    #[must_use]
    pub fn classification(&self) -> Classification {
        self.record.classification()
    }

    /// GPA trend, one entry per semester
    #[must_use]
    pub fn history(&self) -> &[GpaSnapshot] {
        &self.record.gpa_history
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
