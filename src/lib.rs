//! Shared library for `cgpa_calc`
//! GPA and CGPA tracking on the 5-point grading scale, used by the `cgpacalc` CLI

pub mod core;

pub use crate::core::{config, get_version};
pub use logger::{debug, error, info, verbose, warn, Level};
