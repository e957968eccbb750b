//! CLI command handlers for `cgpacalc`.
//!
//! Each command is implemented in its own submodule. Record commands return
//! `Err` with a message for the user; `main` prints it and exits non-zero.

pub mod config;
pub mod course;
pub mod report;
pub mod semester;
pub mod show;

use cgpa_calc::core::models::AcademicRecord;
use cgpa_calc::core::record::Mutation;
use cgpa_calc::core::store::RecordStore;
use cgpa_calc::core::tracker::Tracker;

/// Apply a mutation and turn lookup or save failures into a user message
pub fn apply<S: RecordStore>(
    tracker: &mut Tracker<S>,
    mutation: Mutation,
) -> Result<&AcademicRecord, String> {
    tracker.apply(mutation).map_err(|e| e.to_string())?;
    if tracker.last_save_failed() {
        return Err("Changes could not be saved; see the log for details".to_string());
    }
    Ok(tracker.record())
}
