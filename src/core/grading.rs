//! Nigerian 5-point grading scale, degree classification and score bands

use logger::warn;
use std::fmt;
use std::str::FromStr;

/// Maximum point value on the scale (an `A`).
pub const MAX_POINTS: f64 = 5.0;

/// Lower bounds of the four upper bands, highest first. Anything below the
/// last bound is the bottom band. Shared by classification and color bands.
const BAND_THRESHOLDS: [f64; 4] = [4.5, 3.5, 2.5, 1.5];

/// A letter grade on the 5-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 5 points
    A,
    /// 4 points
    B,
    /// 3 points
    C,
    /// 2 points
    D,
    /// 1 point
    E,
    /// 0 points
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Point value of this grade
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::A => 5.0,
            Self::B => 4.0,
            Self::C => 3.0,
            Self::D => 2.0,
            Self::E => 1.0,
            Self::F => 0.0,
        }
    }

    /// Letter for this grade
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Coerce free-form grade input into a grade.
    ///
    /// Blank input means "no grade yet" and yields `None`. Any other text that
    /// is not a known letter is treated as an `F`, so it still counts toward
    /// the average with zero points instead of blocking the computation.
    ///
    /// # Examples
    /// ```
    /// use cgpa_calc::core::grading::Grade;
    ///
    /// assert_eq!(Grade::coerce(" b "), Some(Grade::B));
    /// assert_eq!(Grade::coerce(""), None);
    /// assert_eq!(Grade::coerce("A+"), Some(Grade::F));
    /// ```
    #[must_use]
    pub fn coerce(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.parse().unwrap_or_else(|_: String| {
            warn!("Unknown grade '{trimmed}' treated as F");
            Self::F
        }))
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown grade: '{s}'")),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

/// Point value for a grade key; `0.0` for anything not on the scale, including
/// an empty string. Keys match exactly, so `"a"` is not an `A`; free-form input
/// goes through [`Grade::coerce`] first.
#[must_use]
pub fn points_of(grade: &str) -> f64 {
    Grade::ALL
        .iter()
        .copied()
        .find(|g| g.letter() == grade)
        .map_or(0.0, Grade::points)
}

/// Serde adapter storing an optional grade as its letter, or `""` when unset.
pub mod optional_letter {
    use super::Grade;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Write the letter, or an empty string for no grade.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(grade: &Option<Grade>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(grade.map_or("", Grade::letter))
    }

    /// Read a letter through [`Grade::coerce`]; `null` and `""` are unset.
    ///
    /// # Errors
    /// Fails when the value is neither a string nor null.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Grade>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Grade::coerce))
    }
}

/// Degree-honors band derived from a CGPA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// CGPA in `[4.5, 5.0]`
    FirstClass,
    /// CGPA in `[3.5, 4.5)`
    SecondClassUpper,
    /// CGPA in `[2.5, 3.5)`
    SecondClassLower,
    /// CGPA in `[1.5, 2.5)`
    ThirdClass,
    /// CGPA below `1.5`
    Fail,
}

impl Classification {
    /// Classify a CGPA. Boundary values belong to the higher band.
    #[must_use]
    pub fn from_cgpa(cgpa: f64) -> Self {
        match band_index(cgpa) {
            0 => Self::FirstClass,
            1 => Self::SecondClassUpper,
            2 => Self::SecondClassLower,
            3 => Self::ThirdClass,
            _ => Self::Fail,
        }
    }

    /// Display label, e.g. "Second Class Upper"
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstClass => "First Class",
            Self::SecondClassUpper => "Second Class Upper",
            Self::SecondClassLower => "Second Class Lower",
            Self::ThirdClass => "Third Class",
            Self::Fail => "Fail",
        }
    }

    /// Color band shared with the CGPA indicator
    #[must_use]
    pub const fn band(self) -> ScoreBand {
        match self {
            Self::FirstClass => ScoreBand::Excellent,
            Self::SecondClassUpper => ScoreBand::Strong,
            Self::SecondClassLower => ScoreBand::Fair,
            Self::ThirdClass => ScoreBand::Weak,
            Self::Fail => ScoreBand::Failing,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five-step color ramp (green to red) over the same thresholds as
/// [`Classification`]. Used for the CGPA indicator and per-grade badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// `>= 4.5`
    Excellent,
    /// `>= 3.5`
    Strong,
    /// `>= 2.5`
    Fair,
    /// `>= 1.5`
    Weak,
    /// `< 1.5`
    Failing,
}

impl ScoreBand {
    /// Band for a point value (an aggregate CGPA or a single grade's points)
    #[must_use]
    pub fn from_points(points: f64) -> Self {
        match band_index(points) {
            0 => Self::Excellent,
            1 => Self::Strong,
            2 => Self::Fair,
            3 => Self::Weak,
            _ => Self::Failing,
        }
    }

    /// Band for a course grade badge; an unset grade counts as zero points
    #[must_use]
    pub fn for_grade(grade: Option<Grade>) -> Self {
        Self::from_points(grade.map_or(0.0, Grade::points))
    }

    /// CSS color for this band
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "hsl(142, 76%, 36%)",
            Self::Strong => "hsl(142, 71%, 45%)",
            Self::Fair => "hsl(38, 92%, 50%)",
            Self::Weak => "hsl(25, 95%, 53%)",
            Self::Failing => "hsl(0, 84%, 60%)",
        }
    }

    /// CSS class suffix used by the HTML report badges
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Excellent => "band-excellent",
            Self::Strong => "band-strong",
            Self::Fair => "band-fair",
            Self::Weak => "band-weak",
            Self::Failing => "band-failing",
        }
    }
}

fn band_index(value: f64) -> usize {
    BAND_THRESHOLDS
        .iter()
        .position(|&bound| value >= bound)
        .unwrap_or(BAND_THRESHOLDS.len())
}
