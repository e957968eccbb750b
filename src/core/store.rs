//! Persistence boundary for academic records
//!
//! The record is stored as a JSON document:
//!
//! ```json
//! {
//!   "semesters": [{ "id": "1", "name": "Semester 1", "gpa": 4.6,
//!                   "courses": [{ "id": "2", "title": "MTH 101", "grade": "A", "unit": 3 }] }],
//!   "cgpa": 4.6,
//!   "gpaHistory": [{ "semester": "Semester 1", "gpa": 4.6, "cgpa": 4.6 }]
//! }
//! ```
//!
//! Store failures never stop the core: [`load_or_fresh`] falls back to a fresh
//! record and logs the problem.

use crate::core::models::AcademicRecord;
use logger::{debug, warn};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors raised by a [`RecordStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The temporary file could not be moved over the target
    #[error("Failed to replace {path}: {source}")]
    Persist {
        /// Target file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Serialize a record to its JSON document.
///
/// # Errors
/// Returns an error only if JSON encoding fails, which does not happen for
/// finite GPA values.
pub fn serialize(record: &AcademicRecord) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(record)
}

/// Parse a JSON document into a recomputed record, or `None` if the text is
/// not a valid document.
#[must_use]
pub fn deserialize(text: &str) -> Option<AcademicRecord> {
    match parse_document(text) {
        Ok(record) => Some(record),
        Err(e) => {
            warn!("Stored record is not a valid document: {e}");
            None
        }
    }
}

/// Storage medium for the academic record
pub trait RecordStore {
    /// Load the stored record. `Ok(None)` means the store is empty.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read or holds a malformed document.
    fn load(&self) -> Result<Option<AcademicRecord>, StoreError>;

    /// Replace the stored record.
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save(&mut self, record: &AcademicRecord) -> Result<(), StoreError>;
}

/// Load from `store`, falling back to [`AcademicRecord::fresh`] when the store
/// is empty or unreadable. Failures are logged, never returned.
pub fn load_or_fresh<S: RecordStore + ?Sized>(store: &S) -> AcademicRecord {
    match store.load() {
        Ok(Some(record)) => record,
        Ok(None) => {
            debug!("No stored record; starting with one empty semester");
            AcademicRecord::fresh()
        }
        Err(e) => {
            warn!("Failed to load stored record ({e}); starting fresh");
            AcademicRecord::fresh()
        }
    }
}

fn parse_document(text: &str) -> Result<AcademicRecord, StoreError> {
    let mut record: AcademicRecord = serde_json::from_str(text)?;
    record.reseed_ids();
    record.recompute();
    Ok(record)
}

/// A JSON file on disk. Writes go to a temporary file in the same directory
/// that then replaces the target, so a crash never leaves a half-written file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path` (created on first save)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<Option<AcademicRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        let record = parse_document(&text)?;
        debug!(
            "Loaded {} semesters from {}",
            record.semesters.len(),
            self.path.display()
        );
        Ok(Some(record))
    }

    fn save(&mut self, record: &AcademicRecord) -> Result<(), StoreError> {
        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir)?;

        let temp_file = NamedTempFile::new_in(parent_dir)?;
        {
            let mut writer = BufWriter::new(&temp_file);
            serde_json::to_writer_pretty(&mut writer, record)?;
            writer.flush()?;
        }
        temp_file
            .persist(&self.path)
            .map_err(|e| StoreError::Persist {
                path: self.path.clone(),
                source: e.error,
            })?;
        debug!("Saved record to {}", self.path.display());
        Ok(())
    }
}

/// In-memory store holding the serialized document; nothing touches disk
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Option<String>,
}

impl MemoryStore {
    /// Empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { document: None }
    }

    /// Store pre-filled with a document (which may be malformed)
    #[must_use]
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
        }
    }

    /// Last saved document, if any
    #[must_use]
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl RecordStore for MemoryStore {
    fn load(&self) -> Result<Option<AcademicRecord>, StoreError> {
        self.document.as_deref().map(parse_document).transpose()
    }

    fn save(&mut self, record: &AcademicRecord) -> Result<(), StoreError> {
        self.document = Some(serialize(record)?);
        Ok(())
    }
}
