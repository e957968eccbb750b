//! Mermaid chart generator for the GPA trend
//!
//! Generates Mermaid `xychart-beta` syntax that can be embedded in Markdown
//! files and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::grading::MAX_POINTS;
use crate::core::models::GpaSnapshot;
use std::fmt::Write;

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate a line chart of semester GPA with the CGPA as a second line
    ///
    /// Returns `None` when there is no history to plot.
    #[must_use]
    pub fn generate_trend_chart(history: &[GpaSnapshot]) -> Option<String> {
        if history.is_empty() {
            return None;
        }

        let labels: Vec<String> = history
            .iter()
            .map(|p| format!("\"{}\"", Self::sanitize_label(&p.semester)))
            .collect();
        let gpas: Vec<String> = history.iter().map(|p| format!("{:.2}", p.gpa)).collect();
        let cgpas: Vec<String> = history.iter().map(|p| format!("{:.2}", p.cgpa)).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        output.push_str("    title \"GPA Trend\"\n");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(output, "    y-axis \"Grade points\" 0 --> {MAX_POINTS:.0}");
        let _ = writeln!(output, "    line [{}]", gpas.join(", "));
        let _ = writeln!(output, "    line [{}]", cgpas.join(", "));
        output.push_str("```\n");
        Some(output)
    }

    /// Make a semester name safe inside a quoted Mermaid label
    fn sanitize_label(name: &str) -> String {
        name.chars()
            .map(|c| match c {
                '"' => '\'',
                '\n' | '\r' | '[' | ']' => ' ',
                _ => c,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(semester: &str, gpa: f64, cgpa: f64) -> GpaSnapshot {
        GpaSnapshot {
            semester: semester.to_string(),
            gpa,
            cgpa,
        }
    }

    #[test]
    fn test_trend_chart() {
        let history = vec![
            snapshot("Semester 1", 4.0, 3.56),
            snapshot("Semester 2", 3.0, 3.56),
        ];
        let chart = MermaidGenerator::generate_trend_chart(&history).expect("chart");

        assert!(chart.starts_with("```mermaid\nxychart-beta"));
        assert!(chart.contains("x-axis [\"Semester 1\", \"Semester 2\"]"));
        assert!(chart.contains("y-axis \"Grade points\" 0 --> 5"));
        assert!(chart.contains("line [4.00, 3.00]"));
        assert!(chart.contains("line [3.56, 3.56]"));
    }

    #[test]
    fn test_empty_history_has_no_chart() {
        assert!(MermaidGenerator::generate_trend_chart(&[]).is_none());
    }

    #[test]
    fn test_sanitize_label() {
        assert_eq!(
            MermaidGenerator::sanitize_label("100L \"First\" [A]"),
            "100L 'First'  A "
        );
    }
}
