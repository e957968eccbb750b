//! Core module: grading, aggregation, the record model and its persistence

pub mod aggregate;
pub mod config;
pub mod grading;
pub mod models;
pub mod record;
pub mod report;
pub mod store;
pub mod tracker;

/// Returns the current version of the `cgpa_calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
