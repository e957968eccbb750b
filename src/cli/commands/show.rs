//! Show command handler

use cgpa_calc::core::report::{ReportContext, ReportGenerator, TextReporter, DEFAULT_TITLE};
use cgpa_calc::core::store::{serialize, RecordStore};
use cgpa_calc::core::tracker::Tracker;

/// Print the record summary, or the stored JSON document with `json`
///
/// # Errors
/// Returns a message if the record cannot be rendered.
pub fn run<S: RecordStore>(tracker: &Tracker<S>, json: bool) -> Result<(), String> {
    let output = if json {
        serialize(tracker.record()).map_err(|e| format!("Failed to encode record: {e}"))?
    } else {
        let ctx = ReportContext::new(tracker.record(), DEFAULT_TITLE);
        TextReporter::new()
            .render(&ctx)
            .map_err(|e| format!("Failed to render record: {e}"))?
    };
    println!("{}", output.trim_end());
    Ok(())
}
