//! Markdown report generator
//!
//! Generates record reports in Markdown format with an embedded Mermaid chart
//! of the GPA trend. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::grading::MAX_POINTS;
use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{fill_template, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let best = ctx
            .best_semester()
            .map_or_else(|| "N/A".to_string(), |s| format!("{} ({:.2})", s.name, s.gpa));
        let chart = MermaidGenerator::generate_trend_chart(&ctx.record.gpa_history)
            .unwrap_or_else(|| "_No semesters to chart yet._\n".to_string());

        fill_template(
            MARKDOWN_TEMPLATE,
            &[
                ("title", ctx.title.to_string()),
                ("cgpa", format!("{:.2}", ctx.cgpa())),
                ("max_points", format!("{MAX_POINTS:.2}")),
                ("classification", ctx.classification().label().to_string()),
                ("total_units", ctx.total_units().to_string()),
                ("graded_units", ctx.graded_units().to_string()),
                ("semester_count", ctx.semester_count().to_string()),
                ("course_count", ctx.course_count().to_string()),
                ("best_semester", best),
                ("semester_tables", Self::generate_semester_tables(ctx)),
                ("history_table", Self::generate_history_table(ctx)),
                ("trend_chart", chart),
            ],
        )
    }

    /// One table per semester
    fn generate_semester_tables(ctx: &ReportContext) -> String {
        if ctx.record.semesters.is_empty() {
            return "_No semesters yet._\n".to_string();
        }

        let mut tables = String::new();
        for semester in &ctx.record.semesters {
            let _ = writeln!(
                tables,
                "### {}\n\nGPA **{:.2}** over {} units\n",
                escape_cell(&semester.name),
                semester.gpa,
                semester.graded_units()
            );

            if semester.courses.is_empty() {
                tables.push_str("_No courses._\n\n");
                continue;
            }

            tables.push_str("| Course | Grade | Units | Points |\n");
            tables.push_str("|---|---|---|---|\n");
            for course in &semester.courses {
                let grade = course.grade.map_or("-", |g| g.letter());
                let points = course
                    .weighted_points()
                    .map_or_else(|| "-".to_string(), |p| format!("{p:.1}"));
                let _ = writeln!(
                    tables,
                    "| {} | {grade} | {} | {points} |",
                    escape_cell(&course.title),
                    course.unit
                );
            }
            tables.push('\n');
        }
        tables
    }

    /// GPA history table
    fn generate_history_table(ctx: &ReportContext) -> String {
        if ctx.record.gpa_history.is_empty() {
            return String::new();
        }

        let mut table = String::new();
        table.push_str("| Semester | GPA | CGPA |\n");
        table.push_str("|---|---|---|\n");
        for point in &ctx.record.gpa_history {
            let _ = writeln!(
                table,
                "| {} | {:.2} | {:.2} |",
                escape_cell(&point.semester),
                point.gpa,
                point.cgpa
            );
        }
        table
    }
}

/// Keep user text from breaking a table row
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
