//! GPA and CGPA aggregation
//!
//! A course takes part in averaging only when it carries a grade and a
//! non-zero unit. The same rule feeds both the semester GPA and the units each
//! semester contributes to the CGPA, so ungraded and zero-unit courses are
//! invisible to every average. [`total_units`] is the one figure that counts
//! every unit; it is for display only.
//!
//! Both averages are rounded to two decimals when computed, and the CGPA is a
//! units-weighted average of the already-rounded semester GPAs.

use crate::core::models::{Course, Semester};
use logger::warn;

/// Round to two decimal places, halves away from zero.
///
/// # Examples
/// ```
/// use cgpa_calc::core::aggregate::round2;
///
/// assert!((round2(96.0 / 27.0) - 3.56).abs() < 1e-9);
/// ```
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Units that count toward the average for a list of courses.
#[must_use]
pub fn graded_units(courses: &[Course]) -> u64 {
    courses
        .iter()
        .filter(|c| c.qualifies())
        .map(|c| u64::from(c.unit))
        .sum()
}

/// Semester GPA: the units-weighted mean of grade points over qualifying
/// courses, rounded to two decimals. Returns `0.0` when no course qualifies.
#[must_use]
pub fn calculate_gpa(courses: &[Course]) -> f64 {
    let (weighted_sum, total_units) = courses
        .iter()
        .filter_map(|c| c.weighted_points().map(|points| (points, c.unit)))
        .fold((0.0_f64, 0_u64), |(sum, units), (points, unit)| {
            (sum + points, units + u64::from(unit))
        });

    weighted_average(weighted_sum, total_units)
}

/// CGPA: the mean of semester GPAs weighted by each semester's qualifying
/// units, rounded to two decimals. Returns `0.0` when no units qualify.
///
/// Uses the stored `gpa` of each semester, so callers must recompute
/// semester GPAs first (see [`AcademicRecord::recompute`]).
///
/// [`AcademicRecord::recompute`]: crate::core::models::AcademicRecord::recompute
#[must_use]
pub fn calculate_cgpa(semesters: &[Semester]) -> f64 {
    let (weighted_sum, total_units) =
        semesters
            .iter()
            .fold((0.0_f64, 0_u64), |(sum, units), semester| {
                let semester_units = semester.graded_units();
                (
                    sum + semester.gpa * to_f64(semester_units),
                    units + semester_units,
                )
            });

    weighted_average(weighted_sum, total_units)
}

/// Every course unit across all semesters, graded or not.
#[must_use]
pub fn total_units(semesters: &[Semester]) -> u64 {
    semesters.iter().map(Semester::total_units).sum()
}

/// Coerce unit input text into a unit count.
///
/// Whole numbers parse as-is and decimals are truncated toward zero. Negative,
/// non-numeric, non-finite or oversized input becomes `0` instead of being
/// rejected.
///
/// # Examples
/// ```
/// use cgpa_calc::core::aggregate::coerce_unit;
///
/// assert_eq!(coerce_unit("3"), 3);
/// assert_eq!(coerce_unit("2.7"), 2);
/// assert_eq!(coerce_unit("-1"), 0);
/// assert_eq!(coerce_unit("three"), 0);
/// ```
#[must_use]
pub fn coerce_unit(input: &str) -> u32 {
    let trimmed = input.trim();
    if let Ok(unit) = trimmed.parse::<u32>() {
        return unit;
    }

    match trimmed.parse::<f64>().ok().and_then(unit_from_f64) {
        Some(unit) => unit,
        None => {
            if !trimmed.is_empty() {
                warn!("Unit '{trimmed}' is not a valid credit unit; using 0");
            }
            0
        }
    }
}

/// Truncated unit count for a number in `0..u32::MAX`, `None` otherwise
fn unit_from_f64(value: f64) -> Option<u32> {
    (value.is_finite() && value >= 0.0 && value < f64::from(u32::MAX))
        .then(|| truncate_unit(value))
}

/// Serde adapter reading a stored unit leniently.
///
/// Numbers follow [`coerce_unit`]: decimals truncate, negative or oversized
/// values become `0`. Strings go through [`coerce_unit`] and `null` (or any
/// other JSON value) is `0`, so one bad unit never rejects a whole document.
pub mod lenient_unit {
    use super::{coerce_unit, unit_from_f64};
    use logger::warn;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Read any JSON value as a unit count.
    ///
    /// # Errors
    /// Fails only when the input is not well-formed for the deserializer.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(match raw {
            Value::Number(n) => n
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .or_else(|| n.as_f64().and_then(unit_from_f64))
                .unwrap_or_else(|| {
                    warn!("Stored unit {n} is not a valid credit unit; using 0");
                    0
                }),
            Value::String(text) => coerce_unit(&text),
            Value::Null => 0,
            other => {
                warn!("Stored unit {other} is not a valid credit unit; using 0");
                0
            }
        })
    }
}

fn weighted_average(weighted_sum: f64, total_units: u64) -> f64 {
    if total_units == 0 {
        0.0
    } else {
        round2(weighted_sum / to_f64(total_units))
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_f64(units: u64) -> f64 {
    units as f64
}

// Callers guarantee `0 <= value < u32::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_unit(value: f64) -> u32 {
    value.trunc() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grading::Grade;

    fn course(grade: Option<Grade>, unit: u32) -> Course {
        Course::new(String::new(), String::new(), grade, unit)
    }

    fn semester(courses: Vec<Course>) -> Semester {
        let mut semester = Semester::new(String::new(), String::new());
        semester.courses = courses;
        semester.recompute_gpa();
        semester
    }

    #[test]
    fn test_round2() {
        assert!((round2(4.6) - 4.6).abs() < 1e-12);
        assert!((round2(3.555_555) - 3.56).abs() < 1e-12);
        assert!((round2(3.554) - 3.55).abs() < 1e-12);
        assert!(round2(0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_empty_is_zero() {
        assert!(calculate_gpa(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_weighted() {
        let courses = vec![course(Some(Grade::A), 3), course(Some(Grade::B), 2)];
        assert!((calculate_gpa(&courses) - 4.6).abs() < 1e-9);
    }

    #[test]
    fn test_gpa_skips_unqualified_courses() {
        let courses = vec![
            course(Some(Grade::B), 3),
            course(None, 4),
            course(Some(Grade::F), 0),
        ];
        assert!((calculate_gpa(&courses) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_gpa_all_zero_units_is_zero() {
        let courses = vec![course(Some(Grade::A), 0), course(Some(Grade::B), 0)];
        assert!(calculate_gpa(&courses).abs() < f64::EPSILON);
    }

    #[test]
    fn test_gpa_f_grade_counts() {
        let courses = vec![course(Some(Grade::A), 2), course(Some(Grade::F), 2)];
        assert!((calculate_gpa(&courses) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_cgpa_weighted_by_units() {
        // 15 units at 4.00 and 12 units at 3.00
        let first = semester(vec![
            course(Some(Grade::B), 5),
            course(Some(Grade::B), 5),
            course(Some(Grade::B), 5),
        ]);
        let second = semester(vec![course(Some(Grade::C), 6), course(Some(Grade::C), 6)]);
        assert!((calculate_cgpa(&[first, second]) - 3.56).abs() < 1e-9);
    }

    #[test]
    fn test_cgpa_ignores_ungraded_units() {
        let first = semester(vec![course(Some(Grade::A), 3), course(None, 10)]);
        let second = semester(vec![course(Some(Grade::C), 3)]);
        assert!((calculate_cgpa(&[first, second]) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_cgpa_no_semesters_is_zero() {
        assert!(calculate_cgpa(&[]).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_units_counts_everything() {
        let semesters = vec![
            semester(vec![course(Some(Grade::A), 3), course(None, 2)]),
            semester(vec![course(Some(Grade::B), 0), course(Some(Grade::C), 4)]),
        ];
        assert_eq!(total_units(&semesters), 9);
    }

    #[test]
    fn test_coerce_unit() {
        assert_eq!(coerce_unit(" 4 "), 4);
        assert_eq!(coerce_unit("3.9"), 3);
        assert_eq!(coerce_unit(""), 0);
        assert_eq!(coerce_unit("-2"), 0);
        assert_eq!(coerce_unit("NaN"), 0);
        assert_eq!(coerce_unit("inf"), 0);
        assert_eq!(coerce_unit("1e20"), 0);
    }

    #[derive(serde::Deserialize)]
    struct StoredUnit {
        #[serde(deserialize_with = "lenient_unit::deserialize")]
        unit: u32,
    }

    fn stored_unit(json: &str) -> u32 {
        serde_json::from_str::<StoredUnit>(json)
            .expect("lenient unit never rejects")
            .unit
    }

    #[test]
    fn test_lenient_unit() {
        assert_eq!(stored_unit(r#"{"unit": 3}"#), 3);
        assert_eq!(stored_unit(r#"{"unit": 2.9}"#), 2);
        assert_eq!(stored_unit(r#"{"unit": -2}"#), 0);
        assert_eq!(stored_unit(r#"{"unit": -0.5}"#), 0);
        assert_eq!(stored_unit(r#"{"unit": null}"#), 0);
        assert_eq!(stored_unit(r#"{"unit": "4"}"#), 4);
        assert_eq!(stored_unit(r#"{"unit": "x"}"#), 0);
        assert_eq!(stored_unit(r#"{"unit": true}"#), 0);
        assert_eq!(stored_unit(r#"{"unit": 1e20}"#), 0);
    }
}
