//! Data models for `cgpa_calc`

pub mod course;
pub mod record;
pub mod semester;

pub use course::Course;
pub use record::{AcademicRecord, GpaSnapshot};
pub use semester::Semester;
