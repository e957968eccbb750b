//! Report generation for an academic record
//!
//! Renders the read-only display values of a record (CGPA, classification,
//! total units, semester tables and the GPA trend) as plain text, Markdown
//! with a Mermaid chart, or self-contained HTML with SVG charts.

pub mod formats;
pub mod visualization;

use crate::core::grading::{Classification, ScoreBand};
use crate::core::models::{AcademicRecord, Semester};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat, TextReporter};
pub use visualization::{MermaidGenerator, SvgGenerator};

/// Default report title
pub const DEFAULT_TITLE: &str = "Academic Record";

/// Data context for report generation
///
/// Every renderer reads from this one view, so the derived values shown in
/// each format always agree.
#[derive(Debug, Clone, Copy)]
pub struct ReportContext<'a> {
    /// Record being reported
    pub record: &'a AcademicRecord,
    /// Heading for the report
    pub title: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(record: &'a AcademicRecord, title: &'a str) -> Self {
        Self { record, title }
    }

    /// Current CGPA
    #[must_use]
    pub const fn cgpa(&self) -> f64 {
        self.record.cgpa
    }

    /// Degree classification for the CGPA
    #[must_use]
    pub fn classification(&self) -> Classification {
        self.record.classification()
    }

    /// Color band of the CGPA indicator
    #[must_use]
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_points(self.record.cgpa)
    }

    /// Every unit across all courses
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.record.total_units()
    }

    /// Units that count toward the CGPA
    #[must_use]
    pub fn graded_units(&self) -> u64 {
        self.record.semesters.iter().map(Semester::graded_units).sum()
    }

    /// Number of semesters
    #[must_use]
    pub fn semester_count(&self) -> usize {
        self.record.semesters.len()
    }

    /// Number of courses across all semesters
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.record.course_count()
    }

    /// Semester with the highest GPA among those with graded units; the first
    /// one wins a tie
    #[must_use]
    pub fn best_semester(&self) -> Option<&'a Semester> {
        self.record
            .semesters
            .iter()
            .filter(|s| s.graded_units() > 0)
            .fold(None, |best: Option<&Semester>, s| match best {
                Some(b) if b.gpa >= s.gpa => Some(b),
                _ => Some(s),
            })
    }
}

/// Fill `{{key}}` placeholders in a single pass over `template`.
///
/// Substituted values are never scanned again, so user text containing a
/// placeholder is emitted as-is. Unknown placeholders are left untouched.
#[must_use]
pub fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (v, end))
        });
        match value {
            Some((v, end)) => {
                output.push_str(v);
                rest = &after[end + 2..];
            }
            None => {
                output.push_str("{{");
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Reporter for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Text => Box::new(TextReporter::new()),
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::two_semester_record;
    use super::*;

    #[test]
    fn test_context_values() {
        let record = two_semester_record();
        let ctx = ReportContext::new(&record, DEFAULT_TITLE);
        assert!((ctx.cgpa() - 3.56).abs() < 1e-9);
        assert_eq!(ctx.classification(), Classification::SecondClassUpper);
        assert_eq!(ctx.band(), ScoreBand::Strong);
        assert_eq!(ctx.total_units(), 27);
        assert_eq!(ctx.graded_units(), 27);
        assert_eq!(ctx.semester_count(), 2);
        assert_eq!(ctx.course_count(), 5);
        assert_eq!(ctx.best_semester().map(|s| s.name.as_str()), Some("Semester 1"));
    }

    #[test]
    fn test_best_semester_skips_ungraded() {
        let record = AcademicRecord::fresh();
        let ctx = ReportContext::new(&record, DEFAULT_TITLE);
        assert!(ctx.best_semester().is_none());
    }

    #[test]
    fn test_generate_writes_file() {
        let record = two_semester_record();
        let ctx = ReportContext::new(&record, DEFAULT_TITLE);
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("report.md");
        reporter_for(ReportFormat::Markdown)
            .generate(&ctx, &path)
            .expect("generate");
        let content = std::fs::read_to_string(&path).expect("read report");
        assert!(content.contains("3.56"));
    }

    #[test]
    fn test_fill_template_single_pass() {
        let filled = fill_template(
            "# {{title}} | {{cgpa}} | {{missing}} {{",
            &[
                ("title", "{{cgpa}}".to_string()),
                ("cgpa", "3.56".to_string()),
            ],
        );
        assert_eq!(filled, "# {{cgpa}} | 3.56 | {{missing}} {{");
    }
}
